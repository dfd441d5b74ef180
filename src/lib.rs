pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

// Full application router: catalog API plus a health probe, nested under
// /api, with a permissive CORS policy for the browser client.
pub fn app(state: AppState) -> Router {
    let api = routes::create_router()
        .route("/", get(|| async { "Divine Shop API" }))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
