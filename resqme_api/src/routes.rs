use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::navigate::navigate_handler::{get_navigate_handler, post_navigate_handler};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home_handler))
        .route(
            "/navigate",
            get(get_navigate_handler).post(post_navigate_handler),
        )
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

async fn home_handler() -> &'static str {
    "Welcome to ResQMe app server. Use /navigate for API requests."
}
