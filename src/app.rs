use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood/:mood", post(handlers::log_mood_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/mood", post(handlers::log_mood))
        .route("/api/reset", post(handlers::reset))
        .route("/api/entries", get(handlers::get_entries))
        .route("/api/view", get(handlers::get_view))
        .with_state(state)
}
