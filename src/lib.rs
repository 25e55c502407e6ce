pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod money;
pub mod repo;
pub mod session;
pub mod ui;
pub mod validate;
