use super::AppState;
use super::handlers;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/menu", get(handlers::menu))
        .route("/prices", get(handlers::prices))
        .route("/events", post(handlers::events))
        .fallback(handlers::not_found)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
