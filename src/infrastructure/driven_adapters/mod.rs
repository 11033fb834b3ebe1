//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories (PostgreSQL and in-memory)
//! - Configuration

pub mod config;
pub mod database;
pub mod memo_repository;
pub mod user_repository;

pub use config::AppConfig;
pub use memo_repository::{InMemoryMemoRepository, PostgresMemoRepository};
pub use user_repository::{InMemoryUserRepository, PostgresUserRepository};
