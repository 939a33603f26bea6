pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod manager;
pub mod not_found;
