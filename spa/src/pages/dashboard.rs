use yew::prelude::*;

use crate::user_session::session_store;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let user_data = session_store().get_user_data().unwrap_or_default();
    let greeting = user_data
        .name
        .or(user_data.email)
        .unwrap_or_else(|| "student".to_owned());
    let role = user_data
        .role
        .map(|role| role.to_string())
        .unwrap_or_else(|| "none".to_owned());

    html! {
        <div class="container py-4">
            <h2>{format!("Welcome back, {greeting}")}</h2>
            <p class="text-muted">{format!("Signed in with role: {role}")}</p>
        </div>
    }
}
