//! Embedded static assets.

use actix_web::{HttpResponse, web};

const STYLESHEET: &str = include_str!("assets/style.css");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/assets/style.css", web::get().to(stylesheet));
}

async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .body(STYLESHEET)
}
