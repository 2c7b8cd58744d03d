//! Non-Leptos routes and middleware: SEO files, health check, redirects

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use sg_core::fixtures::{BUSINESS, PROJECTS};
use sg_core::seo::{manifest::web_manifest, sitemap, PAGES};
use sg_core::{redirects, SiteConfig};
use std::sync::Arc;
use tracing::debug;

/// Routes served outside the Leptos app
pub fn seo_router(config: Arc<SiteConfig>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/manifest.json", get(manifest))
        .route("/robots.txt", get(robots))
        .route("/sitemap.xml", get(sitemap_xml))
        .with_state(config)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(web_manifest(&BUSINESS)),
    )
}

async fn robots(State(config): State<Arc<SiteConfig>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&config),
    )
}

async fn sitemap_xml(State(config): State<Arc<SiteConfig>>) -> impl IntoResponse {
    let last_modified = PROJECTS
        .iter()
        .map(|p| p.completed_on)
        .max()
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::sitemap_xml(PAGES, &config, last_modified),
    )
}

/// Answer legacy paths from the redirect table before routing
pub async fn redirect_legacy_paths(req: Request, next: Next) -> Response {
    if let Some(redirect) = redirects::resolve(req.uri().path()) {
        let target = match req.uri().query() {
            Some(query) => format!("{}?{}", redirect.to, query),
            None => redirect.to.to_string(),
        };
        debug!(from = %req.uri().path(), to = %target, "redirect");

        return if redirect.permanent {
            Redirect::permanent(&target).into_response()
        } else {
            Redirect::temporary(&target).into_response()
        };
    }

    next.run(req).await
}
