use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/visits",
            get(handlers::list_visits).post(handlers::record),
        )
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
