use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use secrecy::SecretString;
use session::gate::{DASHBOARD_PATH, LOGIN_PATH};
use session::{Guard, RoutePaths};
use shared::Capability;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Inspect and manage a UniStay client session")]
pub struct Config {
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    #[arg(
        long,
        help = "Session file, defaults to ~/.unistay/session.json",
        env = "UNISTAY_SESSION_FILE"
    )]
    pub session_file: Option<PathBuf>,

    #[clap(flatten)]
    pub routes: RouteParams,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct RouteParams {
    #[arg(long, env = "UNISTAY_LOGIN_PATH", default_value = LOGIN_PATH)]
    pub login_path: String,

    #[arg(long, env = "UNISTAY_DASHBOARD_PATH", default_value = DASHBOARD_PATH)]
    pub dashboard_path: String,
}

impl From<&RouteParams> for RoutePaths {
    fn from(value: &RouteParams) -> Self {
        RoutePaths {
            login: value.login_path.clone(),
            dashboard: value.dashboard_path.clone(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and store the returned token and profile
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "UNISTAY_PASSWORD")]
        password: SecretString,
    },
    /// Remove the stored session
    Logout,
    /// Show the local session state
    Status,
    /// Print the stored user profile
    Whoami,
    /// Check the stored token locally and with the API
    Validate,
    /// Evaluate a route guard for a path
    Authorize {
        path: String,
        #[arg(long, value_enum, default_value_t = GuardKind::Protected)]
        guard: GuardKind,
        #[arg(long, help = "Guest-only destination for signed-in users")]
        redirect_to: Option<String>,
        #[arg(long, conflicts_with = "guard", help = "Require a capability instead")]
        requires: Option<Capability>,
    },
    /// Check whether the stored role grants a capability
    Can { capability: Capability },
    /// GET an API path with the stored credential
    Fetch { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GuardKind {
    Protected,
    ManagerOnly,
    AdminOnly,
    GuestOnly,
}

pub fn guard(kind: GuardKind, redirect_to: Option<String>, requires: Option<Capability>) -> Guard {
    if let Some(capability) = requires {
        return Guard::Requires(capability);
    }
    match kind {
        GuardKind::Protected => Guard::Protected,
        GuardKind::ManagerOnly => Guard::ManagerOnly,
        GuardKind::AdminOnly => Guard::AdminOnly,
        GuardKind::GuestOnly => Guard::GuestOnly { redirect_to },
    }
}
