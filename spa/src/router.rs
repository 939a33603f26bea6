use session::Guard;
use shared::Capability;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::pages::{
    admin::AdminPage,
    dashboard::Dashboard,
    home::Home,
    login::Login,
    manager::{AddHostel, ManagerPage},
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/manager")]
    Manager,
    #[at("/add-hostel")]
    AddHostel,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! {
            <RouteGuard guard={Guard::GuestOnly { redirect_to: None }}>
                <Login />
            </RouteGuard>
        },
        Route::Dashboard => html! {
            <RouteGuard guard={Guard::Protected}>
                <Dashboard />
            </RouteGuard>
        },
        Route::Manager => html! {
            <RouteGuard guard={Guard::ManagerOnly}>
                <ManagerPage />
            </RouteGuard>
        },
        Route::AddHostel => html! {
            <RouteGuard guard={Guard::Requires(Capability::ManageOwnHostels)}>
                <AddHostel />
            </RouteGuard>
        },
        Route::Admin => html! {
            <RouteGuard guard={Guard::AdminOnly}>
                <AdminPage />
            </RouteGuard>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
