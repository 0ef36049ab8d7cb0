//! Application layer - Use cases and orchestration
//!
//! Contains application-level logic, service implementations, and port
//! definitions. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
