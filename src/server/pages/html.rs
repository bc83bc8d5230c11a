use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt::Write as _;

/// Escapes text for use in element content and quoted attribute values.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `raw` and turns line breaks into `<br>`.
pub(crate) fn paragraphs(raw: &str) -> String {
    escape(raw).replace("\r\n", "\n").replace('\n', "<br>\n")
}

pub(crate) fn error_banner(message: &str) -> String {
    format!(r#"<p class="banner error">{}</p>"#, escape(message))
}

pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    let mut page = String::with_capacity(body.len() + 512);
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.5; }}
section {{ margin-bottom: 2.5rem; }}
.banner.error {{ background: #fde8e8; color: #9b1c1c; padding: .5rem 1rem; border-radius: .25rem; }}
.muted {{ color: #6b7280; }}
form.inline {{ display: inline; }}
fieldset {{ margin-bottom: 1rem; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    );
    Html(page)
}

/// 500 page shown when a page cannot load its data.
pub(crate) fn failure_page(message: &str) -> Response {
    let body = format!("<h1>Something went wrong</h1>\n{}", error_banner(message));
    (StatusCode::INTERNAL_SERVER_ERROR, layout("Error", &body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn paragraphs_keep_line_breaks() {
        assert_eq!(paragraphs("a<b\r\nc"), "a&lt;b<br>\nc");
    }

    #[test]
    fn layout_escapes_title() {
        let Html(page) = layout("A & B", "<p>body</p>");
        assert!(page.contains("<title>A &amp; B</title>"));
        assert!(page.contains("<p>body</p>"));
    }
}
