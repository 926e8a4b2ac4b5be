use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use portfolio_site::analytics::{fetch_visits, load_visits};
use portfolio_site::config::{SupabaseConfig, VisitOrdering};
use portfolio_site::errors::StoreError;
use portfolio_site::models::VisitRecord;
use portfolio_site::pipeline::page_load;
use portfolio_site::recorder::record_visit;
use portfolio_site::supabase::SupabaseStore;
use portfolio_site::VisitStore;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const KEY: &str = "test-anon-key";

#[derive(Default)]
struct FakeTable {
    rows: Vec<(String, u64)>,
    upsert_queries: Vec<HashMap<String, String>>,
    select_queries: Vec<HashMap<String, String>>,
    prefer_headers: Vec<String>,
    fail_with: Option<StatusCode>,
}

type Shared = Arc<Mutex<FakeTable>>;

fn authorized(headers: &HeaderMap) -> bool {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    let expected = format!("Bearer {KEY}");
    apikey == Some(KEY) && bearer == Some(expected.as_str())
}

async fn upsert(
    State(table): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut table = table.lock().unwrap();
    if let Some(status) = table.fail_with {
        return (status, "backend down").into_response();
    }
    table.upsert_queries.push(query);
    if let Some(prefer) = headers.get("prefer").and_then(|v| v.to_str().ok()) {
        table.prefer_headers.push(prefer.to_string());
    }

    let date = body["date"].as_str().unwrap_or_default().to_string();
    let count = body["count"].as_u64().unwrap_or_default();
    match table.rows.iter().position(|(d, _)| *d == date) {
        Some(index) => table.rows[index].1 = count,
        None => table.rows.push((date, count)),
    }
    StatusCode::CREATED.into_response()
}

/// Returns rows in storage order regardless of `order`, plus an extra column.
async fn select(
    State(table): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut table = table.lock().unwrap();
    if let Some(status) = table.fail_with {
        return (status, "backend down").into_response();
    }
    table.select_queries.push(query);
    let rows: Vec<Value> = table
        .rows
        .iter()
        .enumerate()
        .map(|(id, (date, count))| json!({ "id": id, "date": date, "count": count }))
        .collect();
    Json(rows).into_response()
}

async fn spawn_fake(table: Shared) -> String {
    let app = Router::new()
        .route("/rest/v1/visits", get(select).post(upsert))
        .with_state(table);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn store(url: String, key: &str) -> SupabaseStore {
    SupabaseStore::new(SupabaseConfig {
        url,
        anon_key: key.to_string(),
        table: "visits".to_string(),
    })
    .unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn upsert_targets_date_conflict() {
    let table = Shared::default();
    let url = spawn_fake(Arc::clone(&table)).await;
    let store = store(url, KEY);

    record_visit(&store, date("2024-01-01")).await.unwrap();
    record_visit(&store, date("2024-01-01")).await.unwrap();

    let table = table.lock().unwrap();
    assert_eq!(table.rows, vec![("2024-01-01".to_string(), 1)]);
    assert_eq!(table.upsert_queries.len(), 2);
    assert_eq!(table.upsert_queries[0]["on_conflict"], "date");
    assert!(table.prefer_headers[0].contains("resolution=merge-duplicates"));
}

#[tokio::test]
async fn select_orders_by_date_and_loader_sorts() {
    let table = Shared::default();
    table.lock().unwrap().rows = vec![
        ("2024-01-02".to_string(), 5),
        ("2024-01-01".to_string(), 3),
    ];
    let url = spawn_fake(Arc::clone(&table)).await;
    let store = store(url, KEY);

    let visits = fetch_visits(&store).await.unwrap();
    assert_eq!(
        visits,
        vec![
            VisitRecord::new(date("2024-01-01"), 3),
            VisitRecord::new(date("2024-01-02"), 5),
        ]
    );

    let table = table.lock().unwrap();
    assert_eq!(table.select_queries[0]["order"], "date.asc");
    assert_eq!(table.select_queries[0]["select"], "*");
}

#[tokio::test]
async fn rejected_key_surfaces_status() {
    let table = Shared::default();
    let url = spawn_fake(table).await;
    let store = store(url, "wrong-key");

    let err = store.list().await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 401, .. }));
    assert!(load_visits(&store).await.is_empty());
}

#[tokio::test]
async fn backend_failure_renders_empty_history() {
    let table = Shared::default();
    table.lock().unwrap().fail_with = Some(StatusCode::SERVICE_UNAVAILABLE);
    let url = spawn_fake(table).await;
    let store = store(url, KEY);

    let err = record_visit(&store, date("2024-01-01")).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 503, .. }));

    let visits = page_load(&store, date("2024-01-01"), VisitOrdering::Concurrent).await;
    assert!(visits.is_empty());
}

#[tokio::test]
async fn read_after_write_round_trip() {
    let table = Shared::default();
    let url = spawn_fake(table).await;
    let store = store(url, KEY);

    let visits = page_load(&store, date("2024-05-06"), VisitOrdering::ReadAfterWrite).await;
    assert_eq!(visits, vec![VisitRecord::new(date("2024-05-06"), 1)]);
}
