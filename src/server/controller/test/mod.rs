//! End-to-end tests driving the full router in-process against in-memory SQLite.


use axum::http::StatusCode;
use serde_json::json;
use test_utils::{app::TestApp, builder::TestBuilder, context::TestContext};

use crate::{
    model::api::ServiceResponse,
    server::{router::router, state::AppState},
};

/// Builds a router over a fresh database with the kanban tables.
///
/// The context is returned so the database outlives the requests.
async fn setup() -> (TestContext, TestApp) {
    let test = TestBuilder::new().with_kanban_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = TestApp::new(router().with_state(AppState::new(db)));

    (test, app)
}

/// Creates a board through the API and returns its ID.
async fn create_board(app: &TestApp, name: &str) -> i32 {
    let response = app
        .post("/api/boards")
        .json(&json!({ "name": name }))
        .send()
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    response.value()["responseObject"]["id"].as_i64().unwrap() as i32
}

/// Creates a list on `id_board` through the API and returns its ID.
async fn create_list(app: &TestApp, id_board: i32, name: &str) -> i32 {
    let response = app
        .post("/api/lists")
        .json(&json!({ "name": name, "id_board": id_board }))
        .send()
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    response.value()["responseObject"]["id"].as_i64().unwrap() as i32
}
