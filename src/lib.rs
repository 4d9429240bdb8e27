pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod utils;
