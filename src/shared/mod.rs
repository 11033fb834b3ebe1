//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;
pub mod logging;

pub use errors::{ApiError, RepositoryError, UseCaseError};
