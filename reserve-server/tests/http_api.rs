//! HTTP surface tests: routing, auth extraction, error envelope mapping.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use reserve_server::auth::JwtConfig;
use reserve_server::db::models::DiningTableCreate;
use reserve_server::db::repository::{dining_table, restaurant};
use reserve_server::{Config, ServerState, api};

async fn test_app() -> (Router, ServerState, i64, i64) {
    let mut config = Config::from_env();
    config.jwt = JwtConfig {
        secret: "http-test-secret-http-test-secret".to_string(),
    };
    let state = ServerState::in_memory(config).await.expect("state");

    let (restaurant_id, table_id) = {
        let mut conn = state.pool().acquire().await.expect("conn");
        let r = restaurant::create(&mut conn, "Chez Test", None)
            .await
            .expect("restaurant");
        let t = dining_table::create(
            &mut conn,
            DiningTableCreate {
                restaurant_id: r.id,
                name: "T1".to_string(),
                capacity: Some(2),
                position_x: None,
                position_y: None,
                width: None,
                height: None,
                shape: None,
                zone: None,
            },
        )
        .await
        .expect("table");
        (r.id, t.id)
    };

    let app = api::build_app(&state);
    (app, state, restaurant_id, table_id)
}

fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_health_is_public() {
    let (app, _, _, _) = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_public_booking_and_conflict_mapping() {
    let (app, _, rid, tid) = test_app().await;

    let payload = json!({
        "table_id": tid,
        "restaurant_id": rid,
        "date": "2024-06-01",
        "start_time": "18:00",
        "end_time": "20:00",
        "guest_name": "Ada"
    });

    let created = app
        .clone()
        .oneshot(json_request("POST", "/api/reservations", payload.clone(), None))
        .await
        .expect("response");
    assert_eq!(created.status(), StatusCode::OK);
    let body = body_json(created).await;
    assert_eq!(body["status"], "confirmed");

    // Overlap maps to 409 with the E0004 envelope
    let conflicted = app
        .oneshot(json_request("POST", "/api/reservations", payload, None))
        .await
        .expect("response");
    assert_eq!(conflicted.status(), StatusCode::CONFLICT);
    let body = body_json(conflicted).await;
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let (app, state, _, tid) = test_app().await;

    let payload = json!({ "status": "blocked", "date": "2024-06-01" });
    let uri = format!("/api/admin/tables/{tid}/status");

    let anonymous = app
        .clone()
        .oneshot(json_request("PUT", &uri, payload.clone(), None))
        .await
        .expect("response");
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    // A token scoped to another restaurant is forbidden
    let foreign = state
        .jwt
        .generate_token("other-admin", Some(9999), 60)
        .expect("token");
    let forbidden = app
        .clone()
        .oneshot(json_request("PUT", &uri, payload.clone(), Some(&foreign)))
        .await
        .expect("response");
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    // A superuser token goes through and gets the cascade summary
    let root = state.jwt.generate_token("root", None, 60).expect("token");
    let allowed = app
        .oneshot(json_request("PUT", &uri, payload, Some(&root)))
        .await
        .expect("response");
    assert_eq!(allowed.status(), StatusCode::OK);
    let body = body_json(allowed).await;
    assert_eq!(body["cancelled_count"], 0);
    assert_eq!(body["removed_block_count"], 0);
}

#[tokio::test]
async fn test_availability_endpoint_reports_override() {
    let (app, state, rid, tid) = test_app().await;

    let root = state.jwt.generate_token("root", None, 60).expect("token");
    let set = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/admin/tables/{tid}/status"),
            json!({ "status": "blocked", "date": "2024-06-01" }),
            Some(&root),
        ))
        .await
        .expect("response");
    assert_eq!(set.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/api/restaurants/{rid}/availability?date=2024-06-01"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["status"], "blocked");
}

#[tokio::test]
async fn test_unknown_status_value_is_rejected_at_the_boundary() {
    let (app, state, _, tid) = test_app().await;
    let root = state.jwt.generate_token("root", None, 60).expect("token");

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/admin/tables/{tid}/status"),
            json!({ "status": "smashed", "date": "2024-06-01" }),
            Some(&root),
        ))
        .await
        .expect("response");
    // serde rejects the open string before the engine ever runs
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
