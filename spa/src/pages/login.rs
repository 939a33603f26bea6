use serde::Deserialize;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth_api;
use crate::components::login_form::{LoginForm, LoginFormData};
use crate::router::Route;
use crate::user_session::session_store;

#[derive(Debug, Default, Deserialize)]
struct LoginQuery {
    from: Option<String>,
}

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let return_to = use_location()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .and_then(|query| query.from)
        .and_then(|from| Route::recognize(&from))
        .filter(|route| *route != Route::NotFound && *route != Route::Login)
        .unwrap_or(Route::Dashboard);
    let error = use_state(|| None::<AttrValue>);

    let on_login_event = {
        let error = error.clone();
        Callback::from(move |event: LoginFormData| {
            let navigator = navigator.clone();
            let return_to = return_to.clone();
            let error = error.clone();
            spawn_local(async move {
                match auth_api::login(event.email.clone(), event.password.clone()).await {
                    Ok(response) => {
                        let store = session_store();
                        if let Err(store_error) = store.set_auth(&response.token, &response.user) {
                            log::error!("Fail to store session, error={store_error}");
                            store.clear_auth_data();
                            error.set(Some("Could not save your session".into()));
                            return;
                        }
                        log::info!(
                            "User login successful, email={email}, role={role:?}",
                            email = &event.email,
                            role = response.user.role
                        );
                        if let Some(navigator) = navigator {
                            navigator.replace(&return_to);
                        }
                    }
                    Err(login_error) => {
                        log::warn!("Login failed, error: {login_error}");
                        session_store().clear_auth_data();
                        error.set(Some("Invalid credentials".into()));
                    }
                }
            });
        })
    };

    html! {
        <main>
            <LoginForm on_login={on_login_event} error={(*error).clone()} />
        </main>
    }
}
