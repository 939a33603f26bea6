use std::fmt::Display;

use async_trait::async_trait;
use url::Url;

use crate::storage::SessionStorage;
use crate::store::{authorization_value, SessionStore};
use crate::token;

/// One authorization check request against the API.
///
/// `Ok(true)` means the API answered with a success status. Transport
/// failures come back as `Err`.
#[async_trait(?Send)]
pub trait AuthValidator {
    type Error: Display;

    async fn validate(&self, endpoint: &Url, authorization: &str) -> Result<bool, Self::Error>;
}

pub fn validate_endpoint(api_url: &Url) -> Result<Url, url::ParseError> {
    let base = api_url.as_str().trim_end_matches('/');
    Url::parse(&format!("{base}/auth/validate/"))
}

impl<S: SessionStorage> SessionStore<S> {
    /// Checks the stored token locally, then with the API.
    ///
    /// A locally expired token clears the session. A rejection from the API
    /// does not.
    pub async fn validate_auth<V: AuthValidator + ?Sized>(
        &self,
        validator: &V,
        api_url: &Url,
    ) -> bool {
        let Some(token) = self.get_token() else {
            return false;
        };

        if token::is_token_expired(&token) {
            log::info!("Session token expired, clearing session");
            self.clear_auth_data();
            return false;
        }

        let endpoint = match validate_endpoint(api_url) {
            Ok(endpoint) => endpoint,
            Err(error) => {
                log::error!("Invalid api url, api_url={api_url}, error={error}");
                return false;
            }
        };

        match validator
            .validate(&endpoint, &authorization_value(&token))
            .await
        {
            Ok(valid) => {
                log::debug!("Api validated session, endpoint={endpoint}, valid={valid}");
                valid
            }
            Err(error) => {
                log::error!("Error validating authentication, endpoint={endpoint}, error={error}");
                false
            }
        }
    }
}
