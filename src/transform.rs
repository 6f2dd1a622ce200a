//! The per-file transform: scan the target README's directory, describe
//! its children, and rewrite the generated section of the README.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::describe::{self, DescriptionEntry};
use crate::error::{Result, ZlanddocError};
use crate::{merge, render, scanner};

/// Content mode of a file flowing through the transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Normal in-memory contents
    Buffer(Vec<u8>),
    /// Placeholder without contents, passed through untouched
    Null,
    /// Streamed contents, not supported
    Stream,
}

/// A file flowing through the transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: PathBuf,
    pub contents: FileContents,
}

impl TargetFile {
    pub fn new(path: impl Into<PathBuf>, contents: FileContents) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Stateless README transform, configured once at construction
pub struct ReadmeTransform {
    build_file_descriptions: bool,
    file_extensions: HashSet<String>,
}

impl ReadmeTransform {
    pub fn new(config: Config) -> Self {
        Self {
            build_file_descriptions: config.build_file_descriptions,
            file_extensions: config.file_extensions.into_iter().collect(),
        }
    }

    /// Runs the scan, describe, synthesize, merge pipeline on one file.
    ///
    /// Stream contents fail, null contents pass through, buffer contents are
    /// replaced by the merged text. Each call reads current filesystem state.
    pub fn transform(&self, file: TargetFile) -> Result<TargetFile> {
        let bytes = match file.contents {
            FileContents::Stream => return Err(ZlanddocError::StreamsUnsupported),
            FileContents::Null => return Ok(file),
            FileContents::Buffer(bytes) => bytes,
        };

        let directory = parent_directory(&file.path);
        let (directory_entries, file_entries) = self.collect_entries(directory)?;

        let block = render::render_block(&directory_entries, &file_entries);
        let merged = merge::merge_generated_block(&String::from_utf8_lossy(&bytes), &block);

        Ok(TargetFile {
            path: file.path,
            contents: FileContents::Buffer(merged.into_bytes()),
        })
    }

    /// Builds the directory and file description entries for `directory`.
    ///
    /// The file list is always empty unless file descriptions are enabled.
    pub fn collect_entries(
        &self,
        directory: &Path,
    ) -> Result<(Vec<DescriptionEntry>, Vec<DescriptionEntry>)> {
        let mut directory_entries = Vec::new();
        for name in scanner::child_directories(directory)? {
            let description = describe::folder_description(&directory.join(&name))?;
            directory_entries.push(DescriptionEntry {
                text: name.clone(),
                link: Some(name),
                description,
            });
        }

        let mut file_entries = Vec::new();
        if self.build_file_descriptions {
            for name in scanner::child_files(directory)? {
                if !self.matches_extension(&name) {
                    continue;
                }
                let path = directory.join(&name);
                let description = describe::file_description(&path)?;
                // A sibling a.js.md documents a.js and wins as the link target
                let link = if sibling_doc(&path).exists() {
                    format!("{}.md", name)
                } else {
                    name.clone()
                };
                file_entries.push(DescriptionEntry {
                    text: name,
                    link: Some(link),
                    description,
                });
            }
        }

        debug!(
            directory = %directory.display(),
            directories = directory_entries.len(),
            files = file_entries.len(),
            "collected description entries"
        );

        Ok((directory_entries, file_entries))
    }

    fn matches_extension(&self, name: &str) -> bool {
        match Path::new(name).extension() {
            Some(ext) => self
                .file_extensions
                .contains(&format!(".{}", ext.to_string_lossy())),
            None => false,
        }
    }
}

fn parent_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn sibling_doc(path: &Path) -> PathBuf {
    let mut doc: OsString = path.as_os_str().to_owned();
    doc.push(".md");
    PathBuf::from(doc)
}
