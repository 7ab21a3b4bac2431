use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use rcalendar::calendar::GridLayout;
use rcalendar::server::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;
use common::memory_pool;

fn app() -> Router {
    build_router(AppState::new(memory_pool(), GridLayout::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn one_off_event_shows_up_in_its_month() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "body": "Dentist", "date": "2025-06-15" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["body"], "Dentist");
    assert_eq!(created["meta"]["date"], "2025-06-15");
    let id = created["id"].as_i64().unwrap();

    let (status, month) = send(&app, Method::GET, "/events/2025/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(month["events"].as_array().unwrap().len(), 1);
    assert_eq!(month["events"][0]["id"], id);
    assert_eq!(month["events"][0]["day"], 15);
    assert_eq!(month["recurringEvents"], json!([]));

    let (_, july) = send(&app, Method::GET, "/events/2025/7", None).await;
    assert_eq!(july["events"], json!([]));
}

#[tokio::test]
async fn recurring_event_is_tagged_with_its_first_day_in_the_month() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/events",
        Some(json!({
            "body": "Choir",
            "startDate": "2025-01-01",
            "pattern": { "weekday": 3 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["meta"]["pattern"], json!({ "weekday": 3 }));

    let (_, month) = send(&app, Method::GET, "/events/2025/6", None).await;
    let recurring = month["recurringEvents"].as_array().unwrap();
    assert_eq!(recurring.len(), 1);
    assert_eq!(recurring[0]["date"], "2025-06-04");
    assert_eq!(recurring[0]["body"], "Choir");

    let (_, before_start) = send(&app, Method::GET, "/events/2024/12", None).await;
    assert_eq!(before_start["recurringEvents"], json!([]));
}

#[tokio::test]
async fn invalid_create_payloads_are_rejected_with_400() {
    let app = app();

    for payload in [
        json!({ "date": "2025-06-15" }),
        json!({ "body": 3, "date": "2025-06-15" }),
        json!({ "body": "x" }),
        json!({ "body": "x", "startDate": "2025-01-01", "pattern": { "weekday": 3, "day": 1 } }),
        json!({ "body": "x", "date": "2025-06-15", "endDate": "2025-07-01" }),
        json!({ "body": "x", "date": "not a date" }),
    ] {
        let (status, body) = send(&app, Method::POST, "/events", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert!(body["error"].is_string());
    }

    let (_, month) = send(&app, Method::GET, "/events/2025/6", None).await;
    assert_eq!(month, json!({ "events": [], "recurringEvents": [] }));
}

#[tokio::test]
async fn malformed_json_is_a_400() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/events")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bad_month_paths_are_400() {
    let app = app();
    for uri in ["/events/abc/6", "/events/2025/13", "/events/2025/0", "/grid/2025/x"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn update_replaces_the_body() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "body": "Dentist", "date": "2025-06-15" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/events/{id}"),
        Some(json!({ "body": "Dentist at 10" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["body"], "Dentist at 10");

    let (_, month) = send(&app, Method::GET, "/events/2025/6", None).await;
    assert_eq!(month["events"][0]["body"], "Dentist at 10");
}

#[tokio::test]
async fn update_errors() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "body": "Dentist", "date": "2025-06-15" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, Method::PUT, &format!("/events/{id}"), Some(json!({ "body": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::PUT, "/events/9999", Some(json!({ "body": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not found");

    let (status, _) = send(&app, Method::PUT, "/events/abc", Some(json!({ "body": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_the_event() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/events",
        Some(json!({ "body": "Gym", "startDate": "2025-01-01", "pattern": { "weekday": 5 } })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/events/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "message": "Event deleted successfully" }));

    let (_, month) = send(&app, Method::GET, "/events/2025/6", None).await;
    assert_eq!(month["recurringEvents"], json!([]));

    let (status, _) = send(&app, Method::DELETE, &format!("/events/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn grid_endpoint_returns_the_cells() {
    let (status, body) = send(&app(), Method::GET, "/grid/2025/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let cells = body.as_array().unwrap();
    assert_eq!(cells.len(), 37);
    assert_eq!(cells[0], json!({ "day": 23, "isCurrent": false }));
    assert_eq!(cells[6], json!({ "day": 1, "isCurrent": true }));
    assert_eq!(cells[36], json!({ "day": 31, "isCurrent": true }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_requests_all_complete() {
    let app = app();

    let mut handles = Vec::new();
    for day in 1..=20u32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let payload = json!({ "body": format!("Event {day}"), "date": format!("2025-06-{day:02}") });
            send(&app, Method::POST, "/events", Some(payload)).await
        }));
    }
    for day in 0..10 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let uri = if day % 2 == 0 { "/events/2025/6" } else { "/health" };
            send(&app, Method::GET, uri, None).await
        }));
    }

    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert!(status.is_success(), "{status}");
    }

    let (_, month) = send(&app, Method::GET, "/events/2025/6", None).await;
    assert_eq!(month["events"].as_array().unwrap().len(), 20);
}
