//! HTML entity escaping for highlighted response bodies.

/// Escape the five HTML-special characters (`&`, `<`, `>`, `"`, `'`) into
/// their entity forms.
///
/// Escaping is applied exactly once per raw substring: callers escape each
/// span as the final step before concatenation and never feed escaped output
/// back through this function.
pub fn escape_html(text: &str) -> String {
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
