//! Login handler tests.

use super::{setup_test_db, test_app, test_config};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use lib_core::model::store::UserRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn login_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_user(pool: &lib_core::DbPool, username: &str, password: &str) {
    let hash = lib_auth::hash_password(password).unwrap();
    UserRepository::create(pool, username, &format!("{username}@example.com"), &hash)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_issues_bearer_token() {
    let pool = setup_test_db().await;
    let config = test_config();
    seed_user(&pool, "alice", "Sup3rSecret").await;

    let response = test_app(pool, config.clone())
        .oneshot(login_request(json!({
            "username": "alice",
            "password": "Sup3rSecret"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().expect("token should be a string");
    let claims = lib_auth::decode_token(token, &config.jwt_secret).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.exp - claims.iat, config.token_ttl_minutes * 60);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let pool = setup_test_db().await;
    seed_user(&pool, "alice", "Sup3rSecret").await;

    let response = test_app(pool, test_config())
        .oneshot(login_request(json!({
            "username": "alice",
            "password": "WrongPassw0rd"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_unknown_username_unauthorized() {
    let pool = setup_test_db().await;

    let response = test_app(pool, test_config())
        .oneshot(login_request(json!({
            "username": "nobody",
            "password": "Sup3rSecret"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let pool = setup_test_db().await;
    let config = test_config();
    seed_user(&pool, "alice", "Sup3rSecret").await;

    let wrong_password = test_app(pool.clone(), config.clone())
        .oneshot(login_request(json!({
            "username": "alice",
            "password": "WrongPassw0rd"
        })))
        .await
        .unwrap();

    let unknown_user = test_app(pool, config)
        .oneshot(login_request(json!({
            "username": "nobody",
            "password": "WrongPassw0rd"
        })))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), unknown_user.status());
    assert_eq!(
        wrong_password
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_user).await;
    assert_eq!(a, b);
}
