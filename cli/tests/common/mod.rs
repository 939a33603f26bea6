#![allow(dead_code)]

use std::path::PathBuf;

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use url::Url;
use uuid::Uuid;

pub const EMAIL: &str = "ama@unistay.com";
pub const PASSWORD: &str = "correct-horse";

pub(crate) fn token_expiring_in(duration: Duration) -> String {
    let exp = (Utc::now() + duration).timestamp();
    encode(
        &Header::default(),
        &json!({"sub": EMAIL, "exp": exp}),
        &EncodingKey::from_secret(b"unistay-test-secret"),
    )
    .expect("Claims should encode")
}

pub(crate) fn valid_token() -> String {
    token_expiring_in(Duration::hours(1))
}

pub(crate) fn expired_token() -> String {
    token_expiring_in(Duration::hours(-1))
}

/// A uniquely named directory under the system temp dir, removed on drop.
pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("unistay_{}", Uuid::new_v4().simple()));
        Self { path }
    }

    pub fn session_file(&self) -> PathBuf {
        self.path.join("session.json")
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Clone)]
struct ApiState {
    token: String,
    profile: Value,
}

fn authorized(state: &ApiState, headers: &HeaderMap) -> bool {
    let expected = format!("Token {}", state.token);
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected)
}

async fn validate(State(state): State<ApiState>, headers: HeaderMap) -> StatusCode {
    if authorized(&state, &headers) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn login(
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Ok(Json(json!({"token": state.token, "user": state.profile})))
    } else {
        Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_owned()))
    }
}

async fn bookings(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    if authorized(&state, &headers) {
        Ok(Json(json!([{"hostel": "Unity Hall", "room": 12}])))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// In-process API accepting exactly one token.
pub struct TestApi {
    pub url: Url,
    handle: JoinHandle<()>,
}

impl TestApi {
    pub async fn start(token: &str, profile: Value) -> anyhow::Result<Self> {
        let state = ApiState {
            token: token.to_owned(),
            profile,
        };
        let app = Router::new()
            .route("/api/auth/validate/", get(validate))
            .route("/api/auth/login/", post(login))
            .route("/api/bookings/", get(bookings))
            .route("/api/broken/", get(broken))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test api failed");
        });
        let url = Url::parse(&format!("http://{address}/api"))?;
        Ok(Self { url, handle })
    }
}

impl Drop for TestApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
