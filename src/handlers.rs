use crate::analytics::{fetch_visits, load_visits};
use crate::chart::{build_chart, render_svg};
use crate::errors::AppError;
use crate::models::{ChartOptions, ChartResponse, VisitRecord};
use crate::pipeline::page_load;
use crate::profile::PROFILE;
use crate::recorder::{record_visit, today_utc};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let visits = page_load(state.store.as_ref(), today_utc(), state.ordering).await;
    let chart = render_svg(&build_chart(&visits), &ChartOptions::default());
    Html(render_index(&PROFILE, &chart))
}

pub async fn list_visits(State(state): State<AppState>) -> Result<Json<Vec<VisitRecord>>, AppError> {
    let visits = fetch_visits(state.store.as_ref()).await?;
    Ok(Json(visits))
}

pub async fn record(State(state): State<AppState>) -> Result<Json<VisitRecord>, AppError> {
    let written = record_visit(state.store.as_ref(), today_utc()).await?;
    Ok(Json(written))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartResponse> {
    let visits = load_visits(state.store.as_ref()).await;
    Json(ChartResponse {
        data: build_chart(&visits),
        options: ChartOptions::default(),
    })
}
