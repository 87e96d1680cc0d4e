use crate::check::{Diagnostic, Severity};
use crate::escape::html_escape;

/// Shown for paths that do not exist under the site root.
pub(super) fn build_not_found_page(path: &str) -> String {
    build_page(
        "Not found",
        &format!(
            r#"<div class="message">no file at <code>{}</code></div>"#,
            html_escape(path)
        ),
    )
}

/// Catalog diagnostics as a readable page (`/__folio/check.html`).
pub(super) fn build_check_page(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return build_page("Catalog check", r#"<div class="ok">catalogs ok</div>"#);
    }
    let mut rows = String::new();
    for d in diagnostics {
        let class = match d.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        rows.push_str(&format!(
            "<li class=\"{class}\"><span class=\"subject\">{}</span> {}</li>\n",
            html_escape(&d.subject),
            html_escape(&d.message),
        ));
    }
    build_page("Catalog check", &format!("<ul>\n{rows}</ul>"))
}

/// Shown when a catalog cannot be read at all.
pub(super) fn build_error_page(error: &str) -> String {
    build_page(
        "Catalog error",
        &format!(r#"<div class="message error">{}</div>"#, html_escape(error)),
    )
}

fn build_page(heading: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>folio dev — {heading}</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  html, body {{ width: 100%; height: 100%; background: #0A0A0A; color: #A0A0A0;
    font-family: 'JetBrains Mono', monospace; }}
  .container {{
    max-width: 720px; margin: 80px auto; padding: 32px;
    border: 1px solid #262626; border-radius: 8px;
  }}
  h1 {{ font-size: 13px; color: #D4AF37; margin-bottom: 20px; font-weight: normal; }}
  ul {{ list-style: none; font-size: 12px; line-height: 1.8; }}
  .subject {{ color: #E5E5E5; }}
  .error {{ color: #EF4444; }}
  .warning {{ color: #F59E0B; }}
  .ok {{ color: #22C55E; font-size: 12px; }}
  .message {{
    font-size: 12px; line-height: 1.7; white-space: pre-wrap; word-break: break-word;
    padding: 16px; background: #141414; border-radius: 4px;
  }}
</style>
</head>
<body>
<div class="container">
  <h1>folio dev — {heading}</h1>
  {body}
</div>
</body>
</html>"##,
        heading = html_escape(heading),
    )
}
