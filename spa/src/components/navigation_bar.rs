use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::user_session::session_store;

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    let navigator = use_navigator();
    // Re-render on every navigation so the links follow the session
    let _location = use_location();

    let store = session_store();
    let signed_in = store.is_authenticated();
    let display_name = store
        .get_user_data()
        .and_then(|user_data| user_data.name.or(user_data.email))
        .unwrap_or_default();

    let on_logout_click = Callback::from(move |_| {
        session_store().clear_auth_data();
        log::info!("User logged out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <Link<Route> classes="navbar-brand" to={Route::Home}>{"UniStay"}</Link<Route>>
                <div class="collapse navbar-collapse">
                    <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                        if signed_in {
                            <li class="nav-item">
                                <Link<Route> classes="nav-link" to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                            </li>
                        }
                        if store.is_manager() {
                            <li class="nav-item">
                                <Link<Route> classes="nav-link" to={Route::Manager}>{"Manage hostels"}</Link<Route>>
                            </li>
                        }
                        if store.is_admin() {
                            <li class="nav-item">
                                <Link<Route> classes="nav-link" to={Route::Admin}>{"Admin"}</Link<Route>>
                            </li>
                        }
                    </ul>
                    if signed_in {
                        <span class="navbar-text me-3">{display_name}</span>
                        <button onclick={on_logout_click} class="btn btn-sm btn-outline-secondary">
                            {"Logout"}
                        </button>
                    } else {
                        <Link<Route> classes="btn btn-sm btn-outline-primary" to={Route::Login}>{"Sign in"}</Link<Route>>
                    }
                </div>
            </div>
        </nav>
    }
}
