use axum::http::{header, HeaderValue, Method};
use axum::{
    middleware,
    routing::{get, get_service, post, put},
    Router,
};
use std::path::Path;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::CorsConfig;
use crate::shared::state::AppState;
use crate::system::auth::middleware::require_admin;
use crate::system::middleware::request_logger::request_logger;
use crate::handlers;

fn cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let origin = cfg.allowed_origin.trim();
    let allow_origin = if origin.is_empty() {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!("Invalid cors.allowed_origin '{}', allowing any origin", origin);
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

/// Routes open to every visitor
///
/// `/contact` is also a page of the frontend, so GET serves its index.
fn public_routes(index: ServeFile) -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATALOG
        // ========================================
        .route("/api/products", get(handlers::a001_product::list_all))
        .route("/api/products/:id", get(handlers::a001_product::get_by_id))
        // ========================================
        // QUOTE REQUESTS
        // ========================================
        .route(
            "/contact",
            get_service(index).post(handlers::a002_inquiry::submit),
        )
        .route("/contact/track/:code", get(handlers::a002_inquiry::track))
}

/// Routes behind the admin bearer token
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/products", post(handlers::a001_product::create))
        .route(
            "/api/products/:id",
            put(handlers::a001_product::update).delete(handlers::a001_product::delete),
        )
        .route("/api/products/upload", post(handlers::a001_product::upload))
        .route("/contact/admin/all", get(handlers::a002_inquiry::list_all))
        .route("/contact/admin/unread", get(handlers::a002_inquiry::list_unread))
        .route(
            "/contact/admin/unread/count",
            get(handlers::a002_inquiry::count_unread),
        )
        .route("/contact/admin/:code", get(handlers::a002_inquiry::get_by_code))
        .route(
            "/contact/admin/:code/status",
            put(handlers::a002_inquiry::update_status),
        )
        .route("/contact/admin/:code/read", put(handlers::a002_inquiry::mark_read))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}

/// Full application router
pub fn configure_routes(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let static_dir = Path::new(&state.config.server.static_dir);
    let index = ServeFile::new(static_dir.join("index.html"));
    // client-side routes (/products, /track, ...) resolve to the index
    let site = ServeDir::new(static_dir).fallback(index.clone());

    public_routes(index)
        .merge(admin_routes(&state))
        .fallback_service(site)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
