use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_net::Error;
use serde_json::json;
use session::AuthValidator;
use shared::SignInResponse;
use url::Url;

use crate::api::API_URL;

pub async fn login(email: String, password: String) -> Result<SignInResponse, Error> {
    let endpoint = format!("{}/auth/login/", API_URL.trim_end_matches('/'));
    log::info!("Doing login, endpoint={endpoint}");
    let response = Request::post(&endpoint)
        .json(&json!({"email": email, "password": password}))?
        .send()
        .await?;
    if !response.ok() {
        let status = response.status();
        let response_body = response.text().await?;
        log::warn!("Api login rejected, status={status}, response={response_body}");
        return Err(Error::GlooError(format!("login failed, status={status}")));
    }
    let response = response.json::<SignInResponse>().await?;
    log::info!("Api auth login, email={email}");
    Ok(response)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooValidator;

#[async_trait(?Send)]
impl AuthValidator for GlooValidator {
    type Error = Error;

    async fn validate(&self, endpoint: &Url, authorization: &str) -> Result<bool, Self::Error> {
        let response = Request::get(endpoint.as_str())
            .header("Authorization", authorization)
            .send()
            .await?;
        log::debug!("Api validate session, status={}", response.status());
        Ok(response.ok())
    }
}
