use std::io::Write;

use anyhow::Context;
use chrono::DateTime;
use session::token;
use session::{authorize, Decision, RoutePaths, SessionStorage, SessionStore};
use shared::Capability;
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::config::{self as cli_config, Command, Config};
use crate::file_storage::FileStorage;
use crate::http::{self, FetchOutcome, HttpValidator};

pub fn session_store(config: &Config) -> anyhow::Result<SessionStore<FileStorage>> {
    let path = match &config.session_file {
        Some(path) => path.clone(),
        None => FileStorage::default_path().context("Cannot locate home directory")?,
    };
    Ok(SessionStore::new(FileStorage::new(path)))
}

/// Runs the configured command. `Ok(false)` means the command ran but the
/// answer was negative: a redirect, a missing permission or an invalid session.
pub async fn run<S: SessionStorage>(
    config: &Config,
    store: &SessionStore<S>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let client = reqwest::Client::new();
    let paths = RoutePaths::from(&config.routes);

    match &config.command {
        Command::Login { email, password } => {
            let response = http::login(&client, &config.api_url, email, password).await?;
            store.set_auth(&response.token, &response.user)?;
            let role = response
                .user
                .role
                .map(|role| role.to_string())
                .unwrap_or_else(|| "none".to_owned());
            info!(%email, %role, "Sign-in succeeded");
            writeln!(out, "Signed in as {email}, role: {role}")?;
        }
        Command::Logout => {
            store.clear_auth_data();
            writeln!(out, "Signed out")?;
        }
        Command::Status => status(store, out)?,
        Command::Whoami => match store.get_user_data() {
            Some(user_data) => writeln!(out, "{}", serde_json::to_string_pretty(&user_data)?)?,
            None => {
                writeln!(out, "No profile stored")?;
                return Ok(false);
            }
        },
        Command::Validate => {
            let validator = HttpValidator::new(client);
            if store.validate_auth(&validator, &config.api_url).await {
                writeln!(out, "Session valid")?;
            } else {
                warn!("Session is not valid");
                writeln!(out, "Session invalid")?;
                return Ok(false);
            }
        }
        Command::Authorize {
            path,
            guard: kind,
            redirect_to,
            requires,
        } => {
            let guard = cli_config::guard(*kind, redirect_to.clone(), *requires);
            match authorize(store, &guard, &paths, path) {
                Decision::Render => writeln!(out, "render {path}")?,
                Decision::Redirect(redirect) => {
                    match redirect.from {
                        Some(from) => writeln!(out, "redirect {} from={from}", redirect.to)?,
                        None => writeln!(out, "redirect {}", redirect.to)?,
                    }
                    return Ok(false);
                }
            }
        }
        Command::Can { capability } => {
            if store.has_permission(*capability) {
                writeln!(out, "yes")?;
            } else {
                writeln!(out, "no")?;
                return Ok(false);
            }
        }
        Command::Fetch { path } => {
            let outcome =
                http::authorized_get(&client, store, &config.api_url, path, &paths.login).await?;
            match outcome {
                FetchOutcome::Body(body) => writeln!(out, "{body}")?,
                FetchOutcome::Failed { status, body } => {
                    writeln!(out, "Request failed, status={status}")?;
                    writeln!(out, "{body}")?;
                    return Ok(false);
                }
                FetchOutcome::SessionExpired { location } => {
                    writeln!(out, "Session expired, sign in again: {location}")?;
                    return Ok(false);
                }
                FetchOutcome::NotSignedIn => {
                    writeln!(out, "Not signed in")?;
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

fn status<S: SessionStorage>(store: &SessionStore<S>, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "authenticated: {}", store.is_authenticated())?;

    if let Some(token) = store.get_token() {
        match token::expiration(&token) {
            Ok(exp) => {
                let expires_at = DateTime::from_timestamp(exp as i64, 0)
                    .map(|at| at.to_rfc3339())
                    .unwrap_or_else(|| exp.to_string());
                writeln!(out, "token expires: {expires_at}")?;
            }
            Err(error) => writeln!(out, "token expires: unknown ({error})")?,
        }
        writeln!(out, "token expired: {}", token::is_token_expired(&token))?;
    }

    let role = store.get_user_role();
    writeln!(
        out,
        "role: {}",
        role.map(|role| role.to_string())
            .unwrap_or_else(|| "none".to_owned())
    )?;
    writeln!(out, "manager: {}", store.is_manager())?;
    writeln!(out, "admin: {}", store.is_admin())?;

    let capabilities: Vec<String> = Capability::iter()
        .filter(|capability| role.is_some_and(|role| role.can(*capability)))
        .map(|capability| capability.to_string())
        .collect();
    writeln!(out, "capabilities: {}", capabilities.join(", "))?;
    Ok(())
}
