// src/handlers/home.rs
// DOCUMENTATION: Landing page handler
// PURPOSE: Serve the HTML shell that drives /search and /calculate

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
