use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ship_registry::config::environment::{EnvironmentConfig, StorageBackend};
use ship_registry::repositories::InMemoryShipStore;
use ship_registry::routes::create_app_router;
use ship_registry::state::AppState;
use ship_registry::utils::clock::FixedClock;

// 3000-01-01T00:00:00Z
const YEAR_3000_MS: i64 = 32503680000000;

fn create_test_app() -> Router {
    let config = EnvironmentConfig {
        storage_backend: StorageBackend::Memory,
        ..Default::default()
    };
    let state = AppState::with_clock(
        Arc::new(InMemoryShipStore::new()),
        Arc::new(FixedClock(2019)),
        config,
    );
    create_app_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ship_body(name: &str, speed: f64) -> Value {
    json!({
        "name": name,
        "planet": "Jupiter",
        "shipType": "MILITARY",
        "prodDate": YEAR_3000_MS,
        "speed": speed,
        "crewSize": 100
    })
}

async fn create_ship(app: &Router, body: Value) -> Value {
    let (status, ship) = send(app, "POST", "/rest/ships", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "unexpected create response: {}", ship);
    ship
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_ship_computes_rating() {
    let app = create_test_app();
    let ship = create_ship(&app, ship_body("Rocinante", 0.5)).await;

    assert_eq!(ship["id"], 1);
    assert_eq!(ship["name"], "Rocinante");
    assert_eq!(ship["shipType"], "MILITARY");
    assert_eq!(ship["prodDate"], YEAR_3000_MS);
    assert_eq!(ship["isUsed"], false);
    assert_eq!(ship["rating"], 2.0);
}

#[tokio::test]
async fn test_create_ignores_client_rating_and_id() {
    let app = create_test_app();
    let mut body = ship_body("Nostromo", 0.5);
    body["id"] = json!(500);
    body["rating"] = json!(99.0);
    body["isUsed"] = json!(true);

    let ship = create_ship(&app, body).await;

    assert_eq!(ship["id"], 1);
    assert_eq!(ship["rating"], 1.0);
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let app = create_test_app();

    let mut missing_planet = ship_body("Nostromo", 0.5);
    missing_planet["planet"] = Value::Null;
    let (status, body) = send(&app, "POST", "/rest/ships", Some(missing_planet)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");

    let (status, _) = send(&app, "POST", "/rest/ships", Some(ship_body("", 0.5))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/rest/ships", Some(ship_body("Warp", 1.5))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut too_old = ship_body("Old", 0.5);
    too_old["prodDate"] = json!(0);
    let (status, _) = send(&app, "POST", "/rest/ships", Some(too_old)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, count) = send(&app, "GET", "/rest/ships/count", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_get_ship_by_id() {
    let app = create_test_app();
    let created = create_ship(&app, ship_body("Serenity", 0.5)).await;

    let (status, fetched) = send(&app, "GET", "/rest/ships/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = send(&app, "GET", "/rest/ships/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_ids_are_bad_requests() {
    let app = create_test_app();

    for uri in ["/rest/ships/0", "/rest/ships/-3", "/rest/ships/abc", "/rest/ships/1.5"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "GET {}", uri);
        assert_eq!(body["code"], "BAD_ADDRESS");

        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "DELETE {}", uri);
    }
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = create_test_app();
    create_ship(&app, ship_body("Galactica", 0.5)).await;

    let (status, updated) = send(
        &app,
        "POST",
        "/rest/ships/1",
        Some(json!({ "isUsed": true, "name": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "Galactica");
    assert_eq!(updated["planet"], "Jupiter");
    assert_eq!(updated["isUsed"], true);
    assert_eq!(updated["rating"], 1.0);

    let (status, _) = send(&app, "POST", "/rest/ships/1", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/rest/ships/9", Some(json!({ "name": "Ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stored) = send(&app, "GET", "/rest/ships/1", None).await;
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_delete_ship() {
    let app = create_test_app();
    create_ship(&app, ship_body("Bebop", 0.3)).await;

    let (status, _) = send(&app, "DELETE", "/rest/ships/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/rest/ships/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/rest/ships/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_paginates_by_id() {
    let app = create_test_app();
    for i in 1..=5 {
        create_ship(&app, ship_body(&format!("Ship {}", i), 0.5)).await;
    }

    let (status, first) = send(&app, "GET", "/rest/ships", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = first.as_array().unwrap().iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let (_, second) = send(&app, "GET", "/rest/ships?pageNumber=1", None).await;
    let ids: Vec<i64> = second.as_array().unwrap().iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![4, 5]);

    let (_, empty) = send(&app, "GET", "/rest/ships?pageNumber=4&pageSize=2", None).await;
    assert_eq!(empty, json!([]));
}

#[tokio::test]
async fn test_list_filters_orders_and_counts() {
    let app = create_test_app();
    create_ship(&app, ship_body("Alpha Fast", 0.9)).await;
    create_ship(&app, ship_body("Alpha Slow", 0.2)).await;
    create_ship(&app, ship_body("Beta", 0.6)).await;
    let mut used = ship_body("Alpha Used", 0.7);
    used["isUsed"] = json!(true);
    create_ship(&app, used).await;

    let (status, ships) = send(
        &app,
        "GET",
        "/rest/ships?name=Alpha&isUsed=false&order=SPEED&pageSize=10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = ships.as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Alpha Slow", "Alpha Fast"]);

    let (_, count) = send(&app, "GET", "/rest/ships/count?name=Alpha&minSpeed=0.5", None).await;
    assert_eq!(count, 2);

    let (_, count) = send(&app, "GET", "/rest/ships/count?name=alpha", None).await;
    assert_eq!(count, 0);

    let (_, count) = send(&app, "GET", "/rest/ships/count", None).await;
    assert_eq!(count, 4);
}

#[tokio::test]
async fn test_list_rejects_bad_query_values() {
    let app = create_test_app();

    let (status, _) = send(&app, "GET", "/rest/ships?order=WEIGHT", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/rest/ships/count?minSpeed=fast", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rerates_from_new_date_and_speed() {
    let app = create_test_app();
    create_ship(&app, ship_body("Enterprise", 0.5)).await;

    // 3009-07-04T15:20:00Z
    let (status, updated) = send(
        &app,
        "POST",
        "/rest/ships/1",
        Some(json!({ "prodDate": 32803574400000i64 + 55_200_000, "speed": 0.9 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["prodDate"], 32803574400000i64);
    assert_eq!(updated["speed"], 0.9);
    assert_eq!(updated["rating"], 6.55);
}

#[tokio::test]
async fn test_rejected_update_reports_wire_names() {
    let app = create_test_app();
    let created = create_ship(&app, ship_body("Discovery", 0.5)).await;

    let (status, body) = send(&app, "POST", "/rest/ships/1", Some(json!({ "crewSize": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["crewSize"].is_array(), "details: {}", body["details"]);

    let (status, body) = send(&app, "POST", "/rest/ships/1", Some(json!({ "prodDate": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["prodDate"].is_array(), "details: {}", body["details"]);

    let (_, stored) = send(&app, "GET", "/rest/ships/1", None).await;
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_non_finite_bounds_are_rejected() {
    let app = create_test_app();
    create_ship(&app, ship_body("Voyager", 0.5)).await;

    let (status, body) = send(&app, "GET", "/rest/ships?maxSpeed=NaN", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["maxSpeed"].is_array());

    let (status, _) = send(&app, "GET", "/rest/ships/count?minRating=inf", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unfiltered_count_tracks_deletes() {
    let app = create_test_app();
    for name in ["One", "Two", "Three"] {
        create_ship(&app, ship_body(name, 0.5)).await;
    }

    let (_, count) = send(&app, "GET", "/rest/ships/count?pageSize=1&order=RATING", None).await;
    assert_eq!(count, 3);

    send(&app, "DELETE", "/rest/ships/2", None).await;
    let (_, count) = send(&app, "GET", "/rest/ships/count", None).await;
    assert_eq!(count, 2);
}
