//! Rendered error pages.
//!
//! Store-touching handlers route every failure through here so the client
//! always receives a rendered view, never a raw error.

use actix_web::HttpResponse;
use minijinja::Value;

use socktalk_shared::ErrorView;

use crate::templates::TemplateEngine;

/// 404 with the given message on the error view.
pub fn not_found(engine: &dyn TemplateEngine, message: &str) -> HttpResponse {
    let (content_type, body) = render_error_body(engine, message);
    HttpResponse::NotFound().content_type(content_type).body(body)
}

/// 500 with the given message on the error view. The original error must
/// already have been logged by the caller; only `message` reaches the client.
pub fn internal_error(engine: &dyn TemplateEngine, message: &str) -> HttpResponse {
    let (content_type, body) = render_error_body(engine, message);
    HttpResponse::InternalServerError()
        .content_type(content_type)
        .body(body)
}

/// Static 500 for when the template layer itself is broken.
pub(crate) fn render_failure() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(fallback_html("Internal Server Error"))
}

fn render_error_body(engine: &dyn TemplateEngine, message: &str) -> (&'static str, String) {
    let view = ErrorView::new(message);
    let body = match engine.render("error.html", Value::from_serialize(&view)) {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, "Failed to render error template");
            fallback_html(message)
        }
    };
    ("text/html; charset=utf-8", body)
}

fn fallback_html(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{message} | SockTalk Blog</title></head>
<body><h1>{message}</h1></body></html>"#
    )
}
