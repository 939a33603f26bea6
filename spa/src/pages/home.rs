use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <section class="container py-5 text-center">
            <h1>{"Find the perfect student accommodation near universities"}</h1>
            <Link<Route> classes="btn btn-primary mt-3" to={Route::Dashboard}>
                {"Go to your dashboard"}
            </Link<Route>>
        </section>
    }
}
