pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod error;
pub mod models;
pub mod utils;
