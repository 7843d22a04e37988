use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/toggle", post(handlers::toggle_day))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/badges", get(handlers::get_badges))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/goals", get(handlers::get_goals).put(handlers::put_goals))
        .route(
            "/api/preferences",
            get(handlers::get_preferences).patch(handlers::patch_preferences),
        )
        .with_state(state)
}
