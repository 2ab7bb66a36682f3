pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
