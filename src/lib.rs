pub mod config;
pub mod csrf;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;
pub mod templates_structs;
pub mod validate;
