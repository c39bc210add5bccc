//! Shared HTML rendering helpers for LIBRIS pages.
//!
//! Every page the application serves goes through [`page`], which wraps a
//! body fragment in the common document shell. Dynamic text must pass
//! through [`escape`] before being interpolated into markup.

use axum::response::Html;

/// Escape text for safe interpolation into HTML content or attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a body fragment in the shared document shell.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    ))
}

/// Render the shared error page. All error kinds use this template; only
/// the message differs.
pub fn error_page(message: &str) -> Html<String> {
    let body = format!(
        "<h1>Error</h1>\n\
         <p class=\"error\">{}</p>\n\
         <p><a href=\"/\">Back to home</a></p>",
        escape(message)
    );
    page("Error", &body)
}
