//! Companion assets for the downstream per-file documentation renderer.
//!
//! The transform itself never consumes these; they are exported for the
//! build step that renders one markdown page per source file, next to the
//! README sections generated here.

/// Template for a rendered per-file documentation page
pub const FILE_DOC_TEMPLATE: &str = include_str!("../templates/filedoc.md.tpl");

/// Normalizes a raw doc-comment paragraph into a single markdown-safe line:
/// runs of whitespace (including newlines) collapse to one space.
pub fn format_file_doc(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
