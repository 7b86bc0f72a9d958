//! End-to-end flows across registration and login.

use super::{setup_test_db, test_app, test_config};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
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

#[tokio::test]
async fn test_register_then_login() {
    let pool = setup_test_db().await;
    let config = test_config();

    let registered = test_app(pool.clone(), config.clone())
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "Sup3rSecret"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(registered.status(), StatusCode::CREATED);

    let logged_in = test_app(pool, config.clone())
        .oneshot(post_json(
            "/api/auth/login",
            json!({
                "username": "carol",
                "password": "Sup3rSecret"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(logged_in.status(), StatusCode::OK);

    let body = body_json(logged_in).await;
    let token = body["access_token"].as_str().unwrap();
    let claims = lib_auth::decode_token(token, &config.jwt_secret).unwrap();
    assert_eq!(claims.sub, "carol");
}

#[tokio::test]
async fn test_registration_does_not_issue_token() {
    let pool = setup_test_db().await;

    let registered = test_app(pool, test_config())
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "Sup3rSecret"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(registered.status(), StatusCode::CREATED);

    let body = body_json(registered).await;
    assert!(body.get("access_token").is_none());
    assert!(body.get("token_type").is_none());
}

#[tokio::test]
async fn test_two_users_register_and_login_independently() {
    let pool = setup_test_db().await;
    let config = test_config();

    for (name, email) in [("dave", "dave@example.com"), ("erin", "erin@example.com")] {
        let response = test_app(pool.clone(), config.clone())
            .oneshot(post_json(
                "/api/auth/register",
                json!({
                    "username": name,
                    "email": email,
                    "password": "Sup3rSecret"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    for name in ["dave", "erin"] {
        let response = test_app(pool.clone(), config.clone())
            .oneshot(post_json(
                "/api/auth/login",
                json!({
                    "username": name,
                    "password": "Sup3rSecret"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let claims =
            lib_auth::decode_token(body["access_token"].as_str().unwrap(), &config.jwt_secret)
                .unwrap();
        assert_eq!(claims.sub, name);
    }
}
