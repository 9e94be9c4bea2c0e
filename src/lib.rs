pub mod api_doc;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
