//! Request and response types for the HTTP API.

pub mod assistant;
pub mod route;
pub mod sessions;
