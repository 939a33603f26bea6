pub mod login_form;
pub mod navigation_bar;
pub mod route_guard;
