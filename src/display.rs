/// Shortens an answer for console display. Truncation counts characters, not
/// bytes; answers are typically Chinese text and byte slicing would split a
/// code point.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(max_chars).collect();
    shortened.push_str("...");
    shortened
}
