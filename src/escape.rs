//! HTML text/attribute escaping for markup built from catalog data.

/// Escape `&`, `<`, `>`, `"` and `'` so the result is inert in both text
/// and quoted attribute positions.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape multi-line text and turn each line break into `<br>`.
pub fn multiline_html(s: &str) -> String {
    s.replace("\r\n", "\n")
        .split('\n')
        .map(html_escape)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Quote a value for a CSS `url("...")`.
pub fn css_url(src: &str) -> String {
    let escaped = src
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "");
    format!("url(\"{escaped}\")")
}
