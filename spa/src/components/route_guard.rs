use session::{authorize, Decision, Guard, Redirect, RoutePaths};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::user_session::session_store;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub guard: Guard,
    #[prop_or_default]
    pub children: Html,
}

fn replace(navigator: &Navigator, redirect: &Redirect) {
    let route = Route::recognize(&redirect.to).unwrap_or(Route::NotFound);
    let result = match &redirect.from {
        Some(from) => navigator.replace_with_query(&route, &[("from", from)]),
        None => {
            navigator.replace(&route);
            Ok(())
        }
    };
    if let Err(error) = result {
        log::warn!("Fail to redirect, to={to}, error={error:?}", to = redirect.to);
    }
}

/// Renders its children only when the guard lets the current session through,
/// otherwise replaces the current location with the redirect target.
#[function_component(RouteGuard)]
pub fn route_guard(props: &Props) -> Html {
    let navigator = use_navigator();
    let requested_path = use_location()
        .map(|location| location.path().to_owned())
        .unwrap_or_default();

    let decision = authorize(
        &session_store(),
        &props.guard,
        &RoutePaths::default(),
        &requested_path,
    );

    use_effect_with(decision.clone(), move |decision| {
        if let (Decision::Redirect(redirect), Some(navigator)) = (decision, navigator) {
            replace(&navigator, redirect);
        }
    });

    match decision {
        Decision::Render => props.children.clone(),
        Decision::Redirect(_) => html! {},
    }
}
