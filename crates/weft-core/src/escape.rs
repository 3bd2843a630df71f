//! Output escaping

/// Escape characters that could be misread as markup by whatever
/// structured message format the rendered prompt is embedded in.
///
/// Applied to function results before substitution, so a function cannot
/// inject text that a downstream chat-message parser would treat as
/// structure. Literal template text is the author's own and is never
/// escaped.
pub fn escape_prompt_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
