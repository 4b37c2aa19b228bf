//! HTML escaping for display strings

/// Escape the HTML-significant characters `&<>"'` in a string.
///
/// Applied to every display name fragment and hyperlink target before
/// composition; the render layer applies it to anything else it interpolates.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
