//! Login and token-guard behavior over the HTTP surface.

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use curio_auth::jwt::Claims;

use crate::helpers::{TEST_SECRET, TestApp};

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let (status, body) = app.request("GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_login_then_guarded_request_resolves_identity() {
    let app = TestApp::new().await;
    let alice = app.create_user("alice@example.com", "s3cr3t", false);

    let token = app.login("alice@example.com", "s3cr3t").await;

    let (status, body) = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], alice.id.to_string());
    assert_eq!(body["data"]["email"], "alice@example.com");
    // The password hash never leaves the server.
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_responses_are_identical() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", "s3cr3t", false);

    let (unknown_status, unknown_body) = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "bob@example.com", "password": "anything" })),
            None,
        )
        .await;

    let (wrong_status, wrong_body) = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@example.com", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    // Same shape, same message: nothing discloses whether the email exists.
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_blocked_user_login() {
    let app = TestApp::new().await;
    app.create_user("carol@example.com", "s3cr3t", true);

    // Correct secret: blocked status is disclosed as 403.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "carol@example.com", "password": "s3cr3t" })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");

    // Wrong secret: generic 401, blocked status never leaks without proof.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "carol@example.com", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_empty_credentials_are_rejected_as_invalid() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", "s3cr3t", false);

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@example.com", "password": "" })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_rejects_missing_and_garbage_tokens() {
    let app = TestApp::new().await;

    let (status, _) = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request("GET", "/api/collections", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_foreign_secret_is_rejected() {
    let app = TestApp::new().await;
    let alice = app.create_user("alice@example.com", "s3cr3t", false);

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: alice.id,
        email: alice.email,
        iat: now,
        exp: now + 3600,
    };
    let forged = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let (status, _) = app.request("GET", "/api/auth/me", None, Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new().await;
    let alice = app.create_user("alice@example.com", "s3cr3t", false);

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: alice.id,
        email: alice.email,
        iat: now - 7200,
        exp: now - 60,
    };
    let stale = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, _) = app.request("GET", "/api/auth/me", None, Some(&stale)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blocking_takes_effect_on_next_guarded_request() {
    let app = TestApp::new().await;
    let alice = app.create_user("alice@example.com", "s3cr3t", false);

    let token = app.login("alice@example.com", "s3cr3t").await;

    // Token works while the account is in good standing.
    let (status, body) = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], alice.id.to_string());

    // An administrator blocks the account. The still-unexpired, correctly
    // signed token must be rejected on the very next guarded request.
    app.users.set_blocked(alice.id, true);

    let (status, body) = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");

    // Unblocking restores access with the same token.
    app.users.set_blocked(alice.id, false);
    let (status, _) = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_guard_failures_share_a_generic_response_shape() {
    let app = TestApp::new().await;
    let alice = app.create_user("alice@example.com", "s3cr3t", false);

    let (_, missing) = app.request("GET", "/api/auth/me", None, None).await;
    let (_, garbage) = app
        .request("GET", "/api/auth/me", None, Some("garbage"))
        .await;

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: alice.id,
        email: alice.email,
        iat: now - 7200,
        exp: now - 60,
    };
    let stale = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    let (_, expired) = app.request("GET", "/api/auth/me", None, Some(&stale)).await;

    // Missing, invalid, and expired are indistinguishable to the caller.
    assert_eq!(missing, garbage);
    assert_eq!(garbage, expired);
}
