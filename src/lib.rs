pub mod config;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;
