use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(ManagerPage)]
pub fn manager_page() -> Html {
    html! {
        <div class="container py-4">
            <h2>{"Manager dashboard"}</h2>
            <Link<Route> classes="btn btn-outline-primary" to={Route::AddHostel}>
                {"+ Hostel"}
            </Link<Route>>
        </div>
    }
}

#[function_component(AddHostel)]
pub fn add_hostel() -> Html {
    html! {
        <div class="container py-4">
            <h2>{"Add a hostel"}</h2>
        </div>
    }
}
