mod common;

use alumnet_auth::validate;
use alumnet::modules::auth::service::AuthService;
use alumnet_config::JwtConfig;
use alumnet_core::ErrorKind;
use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, get_auth_token, send, setup_test_app};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_register_assigns_user_role(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let email = generate_unique_email();

    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": "rahasia123" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], email);
    assert_eq!(body["roles"], json!(["user"]));
    assert!(body.get("password_hash").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "rahasia123", "user").await;

    let app = setup_test_app(pool).await;
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": "rahasia123" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Email already registered");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_rejects_invalid_payloads(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "bukan-email", "password": "123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Invalid email format"));
    assert!(message.contains("Password must be at least 6 characters"));

    let app = setup_test_app(pool).await;
    let (status, _) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": generate_unique_email() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_token_carries_roles(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "rahasia123", "admin").await;

    let token = get_auth_token(setup_test_app(pool).await, &email, "rahasia123").await;

    let principal = validate(&token, &JwtConfig::from_env()).unwrap();
    assert_eq!(principal.user_id, user.id);
    assert_eq!(principal.email, email);
    assert!(principal.has_role("admin"));
    assert!(!principal.has_role("user"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "rahasia123", "user").await;

    let (wrong_status, wrong_body) = send(
        setup_test_app(pool.clone()).await,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "salah-password" })),
    )
    .await;

    let (unknown_status, unknown_body) = send(
        setup_test_app(pool).await,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": generate_unique_email(), "password": "rahasia123" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_then_login_then_me(pool: PgPool) {
    let email = generate_unique_email();

    let (status, _) = send(
        setup_test_app(pool.clone()).await,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": "rahasia123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let token = get_auth_token(setup_test_app(pool.clone()).await, &email, "rahasia123").await;

    let (status, body) = send(
        setup_test_app(pool).await,
        "GET",
        "/api/users/me",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], email);
    assert_eq!(body["roles"], json!(["user"]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_openapi_document_is_served(pool: PgPool) {
    let (status, body) = send(
        setup_test_app(pool).await,
        "GET",
        "/api-docs/openapi.json",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/alumni"].is_object());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_from_cli_logs_in_with_admin_role(pool: PgPool) {
    let user = alumnet::cli::create_admin(&pool, "a@x.com", "pw123").await.unwrap();
    assert_eq!(user.roles, vec!["admin".to_string()]);

    let token = get_auth_token(setup_test_app(pool).await, "a@x.com", "pw123").await;
    let principal = validate(&token, &JwtConfig::from_env()).unwrap();
    assert!(principal.has_role("admin"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_with_unknown_role_persists_nothing(pool: PgPool) {
    let dto = alumnet_models::RegisterRequest {
        email: "orphan@test.com".to_string(),
        password: "rahasia123".to_string(),
    };

    let err = AuthService::register(&pool, dto, "superuser").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("orphan@test.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
