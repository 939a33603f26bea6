use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{Capability, Role, UserData};

use crate::error::Result;
use crate::storage::{SessionStorage, TOKEN_KEY, USER_DATA_KEY};
use crate::token;

pub const AUTH_SCHEME: &str = "Token";

/// Client-side session: a credential token and the cached user profile.
///
/// Reads never fail. Missing, unreadable or malformed entries are logged and
/// answered as "no session". The token and the profile are independent
/// entries, so any combination of the two may be present.
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(error) => {
                log::warn!("Fail to read session entry, key={key}, error={error}");
                None
            }
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)
    }

    /// True when a token is stored. Expiry is not checked here.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn get_user_role(&self) -> Option<Role> {
        let raw = self.read(USER_DATA_KEY)?;
        let profile = match serde_json::from_str::<Value>(&raw) {
            Ok(profile) => profile,
            Err(error) => {
                log::error!("Error getting user role, error={error}");
                return None;
            }
        };
        // Only an object carries a role
        let role = profile.get("role").filter(|role| !role.is_null())?;
        match Role::deserialize(role) {
            Ok(role) => Some(role),
            Err(error) => {
                log::warn!("Unknown user role, role={role}, error={error}");
                None
            }
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.get_user_role() == Some(role)
    }

    pub fn has_permission(&self, capability: Capability) -> bool {
        self.get_user_role()
            .is_some_and(|role| role.can(capability))
    }

    pub fn is_manager(&self) -> bool {
        self.has_permission(Capability::ManagerAccess)
    }

    pub fn is_admin(&self) -> bool {
        self.has_permission(Capability::AdminAccess)
    }

    /// Overwrites the cached profile. The shape is not validated.
    pub fn store_user_data<P: Serialize + ?Sized>(&self, profile: &P) -> Result<()> {
        let serialized = serde_json::to_string(profile)?;
        self.storage.set(USER_DATA_KEY, &serialized)
    }

    pub fn get_user_data(&self) -> Option<UserData> {
        let raw = self.read(USER_DATA_KEY)?;
        match serde_json::from_str::<UserData>(&raw) {
            Ok(user_data) => Some(user_data),
            Err(error) => {
                log::error!("Error getting user data, error={error}");
                None
            }
        }
    }

    pub fn set_auth<P: Serialize + ?Sized>(&self, token: &str, profile: &P) -> Result<()> {
        self.store_token(token)?;
        self.store_user_data(profile)
    }

    pub fn clear_auth_data(&self) {
        for key in [TOKEN_KEY, USER_DATA_KEY] {
            if let Err(error) = self.storage.remove(key) {
                log::warn!("Fail to remove session entry, key={key}, error={error}");
            }
        }
    }

    pub fn is_token_expired(&self) -> bool {
        match self.get_token() {
            Some(token) => token::is_token_expired(&token),
            None => true,
        }
    }

    /// Stricter than `is_authenticated`: the stored token must also be
    /// unexpired. An expired or unreadable token clears the session.
    pub fn is_session_active(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        if self.is_token_expired() {
            log::info!("Session token expired, clearing session");
            self.clear_auth_data();
            return false;
        }
        true
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.get_token().map(|token| authorization_value(&token))
    }

    /// Drops the session after the API rejected its credential and returns the
    /// login location to send the user to.
    pub fn handle_unauthorized(&self, login_path: &str) -> String {
        log::warn!("Api rejected session credential, clearing session");
        self.clear_auth_data();
        format!("{login_path}?session=expired")
    }
}

pub fn authorization_value(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}
