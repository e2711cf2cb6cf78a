pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod models;
pub mod repository;
pub mod routes;
pub mod server;
pub mod services;
pub mod shutdown;
pub mod state;
