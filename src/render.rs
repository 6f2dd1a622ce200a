use crate::describe::DescriptionEntry;

/// Marker opening a generated block. Persisted in README files, so the
/// exact bytes must never change.
pub const START_SENTINEL: &str = "<!-- start generated readme -->";

/// Marker closing a generated block
pub const END_SENTINEL: &str = "<!-- end generated readme -->";

fn render_entry(entry: &DescriptionEntry) -> String {
    let heading = match &entry.link {
        Some(link) => format!("[{}]({})", entry.text, link),
        None => entry.text.clone(),
    };
    format!("### {}  \n{}", heading, entry.description)
}

fn render_section(entries: &[DescriptionEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the sentinel-wrapped markdown block. Either section is omitted
/// when its entry list is empty; entry order is preserved.
pub fn render_block(
    directory_entries: &[DescriptionEntry],
    file_entries: &[DescriptionEntry],
) -> String {
    let mut content = String::from(START_SENTINEL);
    if !directory_entries.is_empty() {
        content.push_str("\n\n## Directories  \n\n");
        content.push_str(&render_section(directory_entries));
    }
    if !file_entries.is_empty() {
        content.push_str("\n\n## Files  \n\n");
        content.push_str(&render_section(file_entries));
    }
    content.push_str("\n\n");
    content.push_str(END_SENTINEL);
    content
}
