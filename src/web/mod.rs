pub mod handlers;
pub mod models;
pub mod persona;
pub mod prompts;
pub mod routes;
