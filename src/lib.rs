pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod server;
pub mod stats;
pub mod utils;
pub mod views;
