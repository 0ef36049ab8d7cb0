//! Cadenza HTTP presentation layer
//!
//! This crate provides the HTTP API for Cadenza.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use routes::create_router;
pub use state::AppState;
