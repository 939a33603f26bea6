use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use session::{AuthValidator, SessionStorage, SessionStore};
use shared::SignInResponse;
use tracing::{debug, info, warn};
use url::Url;

pub fn api_endpoint(api_url: &Url, path: &str) -> anyhow::Result<Url> {
    let base = api_url.as_str().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Url::parse(&format!("{base}/{path}")).with_context(|| format!("Invalid api path: {path}"))
}

#[derive(Debug, Clone, Default)]
pub struct HttpValidator {
    client: reqwest::Client,
}

impl HttpValidator {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthValidator for HttpValidator {
    type Error = reqwest::Error;

    async fn validate(&self, endpoint: &Url, authorization: &str) -> Result<bool, Self::Error> {
        let response = self
            .client
            .get(endpoint.clone())
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;
        debug!(%endpoint, status = %response.status(), "Validation response");
        Ok(response.status().is_success())
    }
}

pub async fn login(
    client: &reqwest::Client,
    api_url: &Url,
    email: &str,
    password: &SecretString,
) -> anyhow::Result<SignInResponse> {
    let endpoint = api_endpoint(api_url, "auth/login/")?;
    info!(%endpoint, email, "Doing sign-in");
    let response = client
        .post(endpoint)
        .json(&json!({"email": email, "password": password.expose_secret()}))
        .send()
        .await?;
    if !response.status().is_success() {
        let status = response.status();
        let message = response.text().await?;
        bail!("Sign-in attempt fail, status={status}, message={message}");
    }
    Ok(response.json::<SignInResponse>().await?)
}

#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    Body(String),
    Failed { status: StatusCode, body: String },
    /// The API rejected the credential; the session is gone and the user
    /// should sign in again at `location`.
    SessionExpired { location: String },
    NotSignedIn,
}

/// GET against the API with the stored credential attached. A 401 ends the
/// session.
pub async fn authorized_get<S: SessionStorage>(
    client: &reqwest::Client,
    store: &SessionStore<S>,
    api_url: &Url,
    path: &str,
    login_path: &str,
) -> anyhow::Result<FetchOutcome> {
    let Some(authorization) = store.authorization_header() else {
        return Ok(FetchOutcome::NotSignedIn);
    };
    let endpoint = api_endpoint(api_url, path)?;
    let response = client
        .get(endpoint.clone())
        .header(AUTHORIZATION, authorization)
        .send()
        .await?;
    let status = response.status();
    debug!(%endpoint, %status, "Api response");

    if status == StatusCode::UNAUTHORIZED {
        warn!(%endpoint, "Api rejected credential");
        let location = store.handle_unauthorized(login_path);
        return Ok(FetchOutcome::SessionExpired { location });
    }
    let body = response.text().await?;
    if status.is_success() {
        Ok(FetchOutcome::Body(body))
    } else {
        Ok(FetchOutcome::Failed { status, body })
    }
}
