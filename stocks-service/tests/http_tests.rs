use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenAuthority;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chrono::Utc;
use mockall::mock;
use serde_json::json;
use serde_json::Value;
use stocks_service::account::errors::AccountError;
use stocks_service::account::models::EmailAddress;
use stocks_service::account::models::User;
use stocks_service::account::models::UserId;
use stocks_service::account::ports::UserRepository;
use stocks_service::account::service::AccountService;
use stocks_service::inbound::http::router::create_router;
use stocks_service::quotes::errors::QuoteError;
use stocks_service::quotes::models::Quote;
use stocks_service::quotes::ports::QuoteGateway;
use tower::ServiceExt;

mock! {
    pub Repo {}

    #[async_trait]
    impl UserRepository for Repo {
        async fn create(&self, user: User) -> Result<User, AccountError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
    }
}

mock! {
    pub Gateway {}

    #[async_trait]
    impl QuoteGateway for Gateway {
        async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError>;
    }
}

const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32b";

fn app(repository: MockRepo, gateway: MockGateway) -> Router {
    let token_authority = Arc::new(TokenAuthority::new(SECRET, 3600));
    let account_service = Arc::new(
        AccountService::new(
            Arc::new(repository),
            PasswordHasher::new(),
            Arc::clone(&token_authority),
        )
        .expect("Failed to build account service"),
    );

    create_router(account_service, token_authority, Arc::new(gateway))
}

fn stored_user(email: &str, password: &str) -> User {
    User {
        id: UserId::new(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: PasswordHasher::new().hash(password).unwrap(),
        created_at: Utc::now(),
    }
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

async fn get_stocks(app: &Router, symbol: &str, bearer: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder()
        .method(Method::GET)
        .uri(format!("/stocks/{}", symbol));
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_register_success() {
    let mut repository = MockRepo::new();
    repository.expect_find_by_email().returning(|_| Ok(None));
    repository.expect_create().returning(|user| Ok(user));

    let app = app(repository, MockGateway::new());

    let (status, body) = post_json(
        &app,
        "/auth/register",
        json!({"email": "alice@example.com", "password": "pw123"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);

    let body: Value = serde_json::from_slice(&body).unwrap();
    let token = body["access_token"].as_str().expect("missing access_token");

    let claims = TokenAuthority::new(SECRET, 3600)
        .verify(token)
        .expect("token does not verify");
    assert_eq!(claims.email, "alice@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let mut repository = MockRepo::new();
    repository
        .expect_find_by_email()
        .returning(|_| Ok(Some(stored_user("alice@example.com", "pw123"))));
    repository.expect_create().times(0);

    let app = app(repository, MockGateway::new());

    let (status, body) = post_json(
        &app,
        "/auth/register",
        json!({"email": "alice@example.com", "password": "pw123"}),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = app(MockRepo::new(), MockGateway::new());

    let (status, _) = post_json(
        &app,
        "/auth/register",
        json!({"email": "not-an-email", "password": "pw123"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let user = stored_user("alice@example.com", "pw123");
    let user_id = user.id;

    let mut repository = MockRepo::new();
    repository
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let app = app(repository, MockGateway::new());

    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({"email": "alice@example.com", "password": "pw123"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    let token = body["access_token"].as_str().expect("missing access_token");

    let claims = TokenAuthority::new(SECRET, 3600)
        .verify(token)
        .expect("token does not verify");
    assert_eq!(claims.sub, user_id.to_string());
}

#[tokio::test]
async fn test_login_failures_are_byte_identical() {
    // Unknown email
    let mut absent = MockRepo::new();
    absent.expect_find_by_email().returning(|_| Ok(None));
    let absent_app = app(absent, MockGateway::new());

    // Known email, wrong password
    let mut mismatch = MockRepo::new();
    mismatch
        .expect_find_by_email()
        .returning(|_| Ok(Some(stored_user("alice@example.com", "pw123"))));
    let mismatch_app = app(mismatch, MockGateway::new());

    let (absent_status, absent_body) = post_json(
        &absent_app,
        "/auth/login",
        json!({"email": "nobody@example.com", "password": "pw123"}),
    )
    .await;
    let (mismatch_status, mismatch_body) = post_json(
        &mismatch_app,
        "/auth/login",
        json!({"email": "alice@example.com", "password": "wrong"}),
    )
    .await;

    assert_eq!(absent_status, StatusCode::UNAUTHORIZED);
    assert_eq!(mismatch_status, StatusCode::UNAUTHORIZED);
    assert_eq!(absent_body, mismatch_body);

    let body: Value = serde_json::from_slice(&absent_body).unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_get_quote_forwards_upstream_body_verbatim() {
    // Non-alphabetical key order and a trailing-zero decimal: any parse and
    // re-serialize step would rewrite both
    const UPSTREAM_BODY: &[u8] =
        br#"{"status":"success","symbol":"AAPL","last":{"size":100,"price":189.9800}}"#;

    let mut gateway = MockGateway::new();
    gateway
        .expect_fetch_quote()
        .withf(|symbol| symbol == "AAPL")
        .times(1)
        .returning(|symbol| Ok(Quote::new(symbol, UPSTREAM_BODY)));

    let app = app(MockRepo::new(), gateway);

    let token = TokenAuthority::new(SECRET, 3600)
        .issue(&UserId::new().to_string(), "alice@example.com")
        .unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/stocks/AAPL")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("missing content type"),
        "application/json"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), UPSTREAM_BODY);
}

#[tokio::test]
async fn test_get_quote_without_token() {
    let mut gateway = MockGateway::new();
    gateway.expect_fetch_quote().times(0);

    let app = app(MockRepo::new(), gateway);

    let (status, _) = get_stocks(&app, "AAPL", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_quote_with_expired_token() {
    let mut gateway = MockGateway::new();
    gateway.expect_fetch_quote().times(0);

    let app = app(MockRepo::new(), gateway);

    // Same secret, expiry well past the verification leeway
    let token = TokenAuthority::new(SECRET, -300)
        .issue(&UserId::new().to_string(), "alice@example.com")
        .unwrap();

    let (status, _) = get_stocks(&app, "AAPL", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_quote_with_foreign_signature() {
    let mut gateway = MockGateway::new();
    gateway.expect_fetch_quote().times(0);

    let app = app(MockRepo::new(), gateway);

    let token = TokenAuthority::new(b"another_secret_32_bytes_long_key!!", 3600)
        .issue(&UserId::new().to_string(), "alice@example.com")
        .unwrap();

    let (status, _) = get_stocks(&app, "AAPL", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_quote_upstream_failure() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_fetch_quote()
        .returning(|_| Err(QuoteError::UpstreamStatus(500)));

    let app = app(MockRepo::new(), gateway);

    let token = TokenAuthority::new(SECRET, 3600)
        .issue(&UserId::new().to_string(), "alice@example.com")
        .unwrap();

    let (status, body) = get_stocks(&app, "AAPL", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Failed to fetch stock price");
}
