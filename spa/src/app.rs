use url::Url;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{auth_api::GlooValidator, API_URL},
    components::navigation_bar::NavigationBar,
    router::{switch, Route},
    user_session::session_store,
};

#[function_component(App)]
pub fn app() -> Html {
    let validated = use_state(|| false);
    let is_first = use_is_first_mount();

    if is_first {
        let validated = validated.clone();
        spawn_local(async move {
            let store = session_store();
            if store.is_authenticated() {
                match Url::parse(API_URL) {
                    Ok(api_url) => {
                        if store.validate_auth(&GlooValidator, &api_url).await {
                            log::info!("Stored session validated");
                        } else {
                            log::warn!("Stored session is not valid");
                        }
                    }
                    Err(error) => log::error!("Invalid api url, api_url={API_URL}, error={error}"),
                }
            }
            // Guards read the store again on this render
            validated.set(true);
        });
    }

    html! {
        <BrowserRouter>
            <NavigationBar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
