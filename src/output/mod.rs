// Output formatting — value rendering for the report and terminal display.

pub mod terminal;

/// Render an optional value the way the report shows it: `None` when absent.
pub fn or_none(value: Option<&str>) -> String {
    value.unwrap_or("None").to_string()
}

/// Render a list of codes as a bracketed, quoted list: `['541611', '561320']`.
pub fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
