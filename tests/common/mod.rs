#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use ojgate::modules::problems::{InMemoryProblemStore, Problem, ProblemStore, TestCase};
use ojgate::ojgate_config::{CorsConfig, JwtConfig};
use ojgate::router::init_router;
use ojgate::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryProblemStore>,
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_secret(TEST_SECRET)
}

pub fn setup_test_app_with_secret(secret: &str) -> TestApp {
    let store = Arc::new(InMemoryProblemStore::new());
    let state = AppState::new(
        JwtConfig::new(secret),
        CorsConfig::default(),
        store.clone(),
    );

    TestApp {
        router: init_router(state),
        store,
    }
}

/// Signs an HS256 token for `username` expiring `ttl` seconds from now.
pub fn sign_token(username: &str, is_admin: bool, ttl: i64) -> String {
    sign_claims(
        &json!({
            "username": username,
            "isAdmin": is_admin,
            "exp": Utc::now().timestamp() + ttl,
        }),
        TEST_SECRET,
        Algorithm::HS256,
    )
}

pub fn sign_claims(claims: &Value, secret: &str, alg: Algorithm) -> String {
    encode(
        &Header::new(alg),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    sign_token("alice", true, 3600)
}

pub fn user_token() -> String {
    sign_token("bob", false, 3600)
}

pub fn auth_cookie(token: &str) -> String {
    format!("authToken={}", token)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: &Value) -> Request<Body> {
    post_raw(uri, cookie, &body.to_string())
}

pub fn post_raw(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn seed_problem(store: &InMemoryProblemStore, slug: &str, title: &str) -> Problem {
    let now = Utc::now();
    store
        .insert(Problem {
            id: Uuid::new_v4(),
            problem_id: slug.to_string(),
            title: title.to_string(),
            statement: format!("Solve {}.", title),
            difficulty: "easy".to_string(),
            tags: vec!["seed".to_string()],
            input_format: Some("Two integers".to_string()),
            output_format: Some("One integer".to_string()),
            constraints: None,
            author: "alice".to_string(),
            created_at: now,
            updated_at: now,
        })
        .await
        .unwrap()
}

pub async fn seed_test_case(store: &InMemoryProblemStore, problem: &Problem, sequence_number: i32) {
    store
        .insert_test_case(TestCase {
            id: Uuid::new_v4(),
            problem_db_id: problem.id,
            sequence_number,
            input: format!("{} {}", sequence_number, sequence_number),
            expected_output: format!("{}", sequence_number * 2),
        })
        .await
        .unwrap();
}
