//! Shared helpers for API integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, so the
//! full middleware stack is exercised without binding a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use metr_api::config::ServerConfig;
use metr_api::router::build_app_router;
use metr_api::state::AppState;
use metr_db::models::user::CreateUser;
use metr_db::repositories::UserRepo;

/// Build the application router exactly as `main.rs` does, against a test pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 5,
    };
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send one request through the router and return the status with the
/// parsed JSON body (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Insert a user directly, bypassing the API (user management has no routes).
pub async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            nom: "Testeur".to_string(),
        },
    )
    .await
    .expect("user insert failed")
    .id
}

/// Create a project through the API, returning its id.
pub async fn seed_project(app: &Router, nom: &str, id_auteur: i64) -> i64 {
    let (status, body) = post(
        app,
        "/api/v1/projects",
        serde_json::json!({ "nom": nom, "client": "Client SA", "idAuteur": id_auteur }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed project failed: {body}");
    body["idProjet"].as_i64().expect("idProjet missing")
}
