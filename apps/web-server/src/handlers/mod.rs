//! HTTP handlers and route configuration.

pub mod error;
mod pages;
mod posts;
mod search;


use actix_web::{HttpResponse, web};
use minijinja::Value;
use serde::Serialize;

use crate::state::AppState;

/// Site-level locals shared by the public pages.
pub const SITE_NAME: &str = "SockTalk Blog";
pub const BASE_DESCRIPTION: &str = "A community-driven blog for real conversations";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/post/{id}", web::get().to(posts::show))
        .route("/search", web::post().to(search::search))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact));
}

/// Render `view` through the named template.
///
/// A failure in the template layer itself is not an expected path; it falls
/// back to a static error body rather than leaking the renderer error.
pub(crate) fn render_view<T: Serialize>(state: &AppState, template: &str, view: &T) -> HttpResponse {
    match state.templates.render(template, Value::from_serialize(view)) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            tracing::error!(template, error = %err, "Template render failed");
            error::render_failure()
        }
    }
}
