pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod practicum;
pub mod services;
pub mod telegram;
