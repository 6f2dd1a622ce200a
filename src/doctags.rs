//! Scanner for tagged doc-comment blocks.
//!
//! Recognizes `/** ... */` blocks and the `@tag` lines inside them:
//! ```text
//! /**
//!  * @filedescription Handles authentication
//!  */
//! ```
//! A tag's text is the remainder of its line plus any following non-tag
//! lines of the same block. The scanner is total: any input yields a
//! (possibly empty) sequence of blocks, never an error.

/// One `@tag` found in a comment block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: String,
    pub text: String,
}

/// One doc-comment block and the tags it carries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    pub tags: Vec<Tag>,
}

/// Extracts all doc-comment blocks from `source`, in order of appearance.
pub fn parse_comments(source: &str) -> Vec<CommentBlock> {
    let mut blocks = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find("/**") {
        let body_start = start + 3;
        let Some(end) = rest[body_start..].find("*/") else {
            // Unterminated block, nothing more to scan
            break;
        };
        blocks.push(parse_block(&rest[body_start..body_start + end]));
        rest = &rest[body_start + end + 2..];
    }

    blocks
}

fn parse_block(body: &str) -> CommentBlock {
    let mut block = CommentBlock::default();
    let mut current: Option<Tag> = None;

    for raw in body.lines() {
        let line = strip_margin(raw);

        if let Some((kind, text)) = split_tag(line) {
            if let Some(tag) = current.take() {
                block.tags.push(finish(tag));
            }
            current = Some(Tag {
                kind: kind.to_string(),
                text: text.to_string(),
            });
        } else if let Some(tag) = current.as_mut() {
            tag.text.push('\n');
            tag.text.push_str(line);
        }
        // Lines before the first tag are the block description, not modeled
    }

    if let Some(tag) = current.take() {
        block.tags.push(finish(tag));
    }

    block
}

/// Drops the leading `* ` margin common to doc-comment lines
fn strip_margin(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// Splits `@kind text` into its parts, if the line starts a tag
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    let kind_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    if kind_len == 0 {
        return None;
    }
    let (kind, text) = rest.split_at(kind_len);
    Some((kind, text.trim_start()))
}

fn finish(mut tag: Tag) -> Tag {
    tag.text = tag.text.trim().to_string();
    tag
}
