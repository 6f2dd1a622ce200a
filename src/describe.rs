//! Description extraction for subdirectories and source files.
//!
//! A subdirectory describes itself through its README: line 0 is the title,
//! line 1 the one-line summary picked up here. A source file describes
//! itself through a `@filedescription` doc-comment tag.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::doctags;
use crate::error::Result;

/// Name of the README file read for folder descriptions
pub const README_FILENAME: &str = "README.md";

/// Doc-comment tag carrying a file's one-line description
pub const FILEDESCRIPTION_TAG: &str = "filedescription";

static NON_EMPTY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\r\n]+").unwrap());

/// One row of a generated "Directories" or "Files" section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionEntry {
    /// Display name
    pub text: String,

    /// Relative link target, `None` renders as plain text
    pub link: Option<String>,

    /// One-line description, possibly empty
    pub description: String,
}

/// Returns the second non-empty line of `dir`'s README, or an empty string
/// when the README is missing or has fewer than two non-empty lines.
pub fn folder_description(dir: &Path) -> Result<String> {
    let readme = dir.join(README_FILENAME);
    if !readme.exists() {
        return Ok(String::new());
    }

    let content = std::fs::read_to_string(&readme)?;
    Ok(NON_EMPTY_LINE
        .find_iter(&content)
        .nth(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default())
}

/// Returns the text of the last `filedescription` tag in `path`'s doc
/// comments, or an empty string when the file carries none.
pub fn file_description(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let source = String::from_utf8_lossy(&bytes);

    let mut description = String::new();
    for block in doctags::parse_comments(&source) {
        for tag in block.tags {
            if tag.kind == FILEDESCRIPTION_TAG {
                // Later tags overwrite earlier ones
                description = tag.text;
            }
        }
    }

    Ok(description)
}
