//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, HEART_MEANING, SHRUG,
    UNKNOWN,
};
use reqwest::StatusCode;
use serde_json::json;

async fn register_and_login(server: &TestServer) -> (RegisterResponse, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/user/register", &request).await.unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (registered, login.access_token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Emoji Tests
// ============================================================================

#[tokio::test]
async fn test_heart_external_then_cache() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    server.forget_emoji("❤️").await.unwrap();

    let response = server.interpret("❤️", None).await.unwrap();
    let first: InterpretResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.emoji, "❤️");
    assert_eq!(first.meaning, HEART_MEANING);
    assert_eq!(first.source, "external");

    let response = server.interpret("❤️", None).await.unwrap();
    let second: InterpretResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.meaning, HEART_MEANING);
    assert_eq!(second.source, "cache");
}

#[tokio::test]
async fn test_empty_meaning_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    server.forget_emoji(SHRUG).await.unwrap();

    let response = server.interpret(SHRUG, None).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Emoji meaning not found");

    // Still not cached: the second call is also a miss
    let response = server.interpret(SHRUG, None).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_upstream_404_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    server.forget_emoji(UNKNOWN).await.unwrap();

    let response = server.interpret(UNKNOWN, None).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "EMOJI_MEANING_NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_emoji_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.interpret("hello", None).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/user/register", &request).await.unwrap();
    let body: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.email, request.email);
    assert_eq!(body.role, "USER");
    assert_eq!(body.message, "User successfully registered.");
    assert!(!body.user_id.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/user/register", &request).await.unwrap();

    let response = server.post("/user/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/user/register", &request).await.unwrap();

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(login.token_type, "Bearer");
    assert!(login.expires_in > 0);
    assert!(!login.access_token.is_empty());
    assert_eq!(login.message, "Authentication successful.");
}

#[tokio::test]
async fn test_login_invalid_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/user/register", &request).await.unwrap();

    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email: request.email,
                password: "WrongPassword1!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server.post_auth("/auth/logout", &token).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "User logged out successfully.");

    let response = server.get_auth("/user/activity", &token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post_auth("/auth/logout", &token).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Authentication token is invalid or not found.");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_activity_records_identified_lookups() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    for emoji in ["🔥", "🎉"] {
        let response = server.interpret(emoji, Some(&token)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server.interpret(SHRUG, Some(&token)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/user/activity", &token).await.unwrap();
    let body: ActivityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let chars: Vec<&str> = body.activities.iter().map(|a| a.emoji_char.as_str()).collect();
    assert_eq!(chars, ["🎉", "🔥"]);
    assert_eq!(body.activities[0].meaning, "celebration");

    let response = server
        .get_auth("/user/activity?limit=1", &token)
        .await
        .unwrap();
    let body: ActivityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.activities.len(), 1);
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (registered, token) = register_and_login(&server).await;

    let response = server
        .put_auth(
            "/user/update",
            &token,
            &json!({ "avatar_url": "https://cdn.example.com/me.png" }),
        )
        .await
        .unwrap();
    let body: UpdateUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.updated_user_details.id, registered.user_id);
    assert_eq!(body.updated_user_details.email, registered.email);
    assert_eq!(
        body.updated_user_details.avatar_url.as_deref(),
        Some("https://cdn.example.com/me.png")
    );
}

#[tokio::test]
async fn test_update_user_email_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (taken, _) = register_and_login(&server).await;
    let (_, token) = register_and_login(&server).await;

    let response = server
        .put_auth("/user/update", &token, &json!({ "email": taken.email }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_deactivate_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/user/register", &request).await.unwrap();
    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.delete_auth("/user", &login.access_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/user/activity", &login.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
