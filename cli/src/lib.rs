pub mod commands;
pub mod config;
pub mod file_storage;
pub mod http;
