use shared::Capability;

use crate::storage::SessionStorage;
use crate::store::SessionStore;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Protected,
    ManagerOnly,
    AdminOnly,
    GuestOnly { redirect_to: Option<String> },
    Requires(Capability),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    pub login: String,
    pub dashboard: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            login: LOGIN_PATH.to_owned(),
            dashboard: DASHBOARD_PATH.to_owned(),
        }
    }
}

/// A replace navigation. `from` is the path the user asked for, kept on
/// redirects to login so the login view can send them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(Redirect),
}

impl Decision {
    fn redirect(to: &str) -> Self {
        Self::Redirect(Redirect {
            to: to.to_owned(),
            from: None,
        })
    }

    fn login(paths: &RoutePaths, requested_path: &str) -> Self {
        Self::Redirect(Redirect {
            to: paths.login.clone(),
            from: Some(requested_path.to_owned()),
        })
    }
}

impl Guard {
    fn required_capability(&self) -> Option<Capability> {
        match self {
            Guard::ManagerOnly => Some(Capability::ManagerAccess),
            Guard::AdminOnly => Some(Capability::AdminAccess),
            Guard::Requires(capability) => Some(*capability),
            Guard::Protected | Guard::GuestOnly { .. } => None,
        }
    }
}

/// Decides whether the view at `requested_path` renders. Evaluated from the
/// current store contents every time; nothing is cached between calls.
pub fn authorize<S: SessionStorage>(
    store: &SessionStore<S>,
    guard: &Guard,
    paths: &RoutePaths,
    requested_path: &str,
) -> Decision {
    let authenticated = store.is_authenticated();

    if let Guard::GuestOnly { redirect_to } = guard {
        return if authenticated {
            Decision::redirect(redirect_to.as_deref().unwrap_or(&paths.dashboard))
        } else {
            Decision::Render
        };
    }

    if !authenticated {
        log::debug!("Unauthenticated access, path={requested_path}, guard={guard:?}");
        return Decision::login(paths, requested_path);
    }

    match guard.required_capability() {
        Some(capability) if !store.has_permission(capability) => {
            log::debug!("Insufficient role, path={requested_path}, capability={capability}");
            Decision::redirect(&paths.dashboard)
        }
        _ => Decision::Render,
    }
}
