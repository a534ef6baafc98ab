//! End-to-end tests: a real listener over a JSON file store, driven by reqwest.

#![allow(clippy::panic)]

use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};
use shoot_tracker::api;
use shoot_tracker::app_state::AppState;
use shoot_tracker::persistence::JsonFileStore;

async fn spawn_server(data_file: &Path) -> String {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };
    let state = AppState::new(Arc::new(JsonFileStore::new(data_file)));
    let app = api::build_router().with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn call(
    client: &reqwest::Client,
    method: reqwest::Method,
    url: String,
    body: Option<Value>,
) -> (u16, Value) {
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let Ok(response) = request.send().await else {
        panic!("request failed");
    };
    let status = response.status().as_u16();
    let json = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn booking_lifecycle_persists_across_restarts() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let data_file = dir.path().join("shoots.json");
    let base = spawn_server(&data_file).await;
    let client = reqwest::Client::new();

    let (status, shoot) = call(
        &client,
        reqwest::Method::POST,
        format!("{base}/api/shoots"),
        Some(json!({
            "modelName": "Ava",
            "salonName": "Luxe",
            "date": "2024-03-01",
            "price": 150
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(shoot["createdAt"], shoot["updatedAt"]);
    let Some(original_id) = shoot["id"].as_str().map(str::to_string) else {
        panic!("generated id");
    };

    let (status, edited) = call(
        &client,
        reqwest::Method::POST,
        format!("{base}/api/shoots/{original_id}/move-to-edited"),
        None,
    )
    .await;
    assert_eq!(status, 201);
    assert_ne!(edited["id"], shoot["id"]);
    assert_eq!(edited["modelName"], "Ava");
    assert_eq!(edited["salonName"], "Luxe");
    assert_eq!(edited["date"], "2024-03-01");
    assert_eq!(edited["price"], 150.0);
    let timestamp = |key: &str| {
        edited[key]
            .as_str()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
    };
    let (Some(edited_at), Some(created_at)) = (timestamp("editedAt"), timestamp("createdAt")) else {
        panic!("timestamps should be RFC 3339");
    };
    assert!(edited_at >= created_at);

    let (status, _) = call(
        &client,
        reqwest::Method::GET,
        format!("{base}/api/shoots/{original_id}"),
        None,
    )
    .await;
    assert_eq!(status, 404);

    // A second server over the same file sees the moved record.
    let restarted = spawn_server(&data_file).await;
    let (status, list) = call(
        &client,
        reqwest::Method::GET,
        format!("{restarted}/api/edited-shoots"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(list, json!([edited]));

    let (status, pending) = call(
        &client,
        reqwest::Method::GET,
        format!("{restarted}/api/shoots"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(pending, json!([]));
}

#[tokio::test]
async fn deleting_unknown_ids_is_404_not_a_crash() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let base = spawn_server(&dir.path().join("shoots.json")).await;
    let client = reqwest::Client::new();
    let ghost = uuid::Uuid::new_v4();

    for url in [
        format!("{base}/api/shoots/{ghost}"),
        format!("{base}/api/edited-shoots/{ghost}"),
    ] {
        let (status, body) = call(&client, reqwest::Method::DELETE, url, None).await;
        assert_eq!(status, 404);
        assert!(body["error"]["message"].is_string());
    }

    let (status, _) = call(&client, reqwest::Method::GET, format!("{base}/health"), None).await;
    assert_eq!(status, 200);
}
