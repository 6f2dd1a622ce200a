use once_cell::sync::Lazy;
use regex::Regex;

use crate::render::{END_SENTINEL, START_SENTINEL};

static GENERATED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(START_SENTINEL),
        regex::escape(END_SENTINEL)
    ))
    .unwrap()
});

/// Removes the first sentinel-delimited generated block, if any
pub fn strip_generated_block(content: &str) -> String {
    GENERATED_BLOCK.replacen(content, 1, "").into_owned()
}

/// Replaces any previous generated block in `content` with `block`.
///
/// The old block is stripped, a trailing newline is ensured, and the new
/// block is appended, so repeated merges never stack blocks.
pub fn merge_generated_block(content: &str, block: &str) -> String {
    let mut merged = strip_generated_block(content);
    if !merged.ends_with('\n') {
        merged.push('\n');
    }
    merged.push_str(block);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_block;

    #[test]
    fn test_append_to_plain_content() {
        let merged = merge_generated_block("Intro\n", "<!-- start generated readme -->\n\n<!-- end generated readme -->");

        assert_eq!(
            merged,
            "Intro\n<!-- start generated readme -->\n\n<!-- end generated readme -->"
        );
    }

    #[test]
    fn test_trailing_newline_added() {
        let merged = merge_generated_block("Intro", "BLOCK-PLACEHOLDER");

        assert!(merged.starts_with("Intro\n"));
    }

    #[test]
    fn test_empty_content_gets_newline() {
        let merged = merge_generated_block("", "BLOCK-PLACEHOLDER");

        assert_eq!(merged, "\nBLOCK-PLACEHOLDER");
    }

    #[test]
    fn test_existing_block_replaced_not_stacked() {
        let first = merge_generated_block("Intro\n", &render_block(&[], &[]));
        let second = merge_generated_block(&first, &render_block(&[], &[]));

        assert_eq!(first, second);
        assert_eq!(second.matches("<!-- start generated readme -->").count(), 1);
    }

    #[test]
    fn test_strip_is_non_greedy() {
        let content = "a\n<!-- start generated readme -->old<!-- end generated readme -->\nb\n<!-- end generated readme -->\n";

        let stripped = strip_generated_block(content);

        assert_eq!(stripped, "a\n\nb\n<!-- end generated readme -->\n");
    }

    #[test]
    fn test_strip_without_block_is_noop() {
        assert_eq!(strip_generated_block("just text\n"), "just text\n");
    }

    #[test]
    fn test_round_trip_restores_content() {
        let original = "Intro\nmore prose\n";

        let merged = merge_generated_block(original, &render_block(&[], &[]));
        let stripped = strip_generated_block(&merged);

        assert_eq!(stripped, original);
    }

    #[test]
    fn test_round_trip_normalizes_missing_newline_only() {
        let original = "no trailing newline";

        let merged = merge_generated_block(original, &render_block(&[], &[]));
        let stripped = strip_generated_block(&merged);

        assert_eq!(stripped, "no trailing newline\n");
    }
}
