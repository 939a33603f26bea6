use shared::Capability;
use strum::IntoEnumIterator;
use yew::prelude::*;

use crate::user_session::session_store;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let store = session_store();
    html! {
        <div class="container py-4">
            <h2>{"Administration"}</h2>
            <ul class="list-group">
                { for Capability::iter().map(|capability| html! {
                    <li class="list-group-item d-flex justify-content-between">
                        <span>{capability.to_string()}</span>
                        <span>{ if store.has_permission(capability) { "granted" } else { "-" } }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
