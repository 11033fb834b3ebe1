//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{MemoListQuery, MemoRepository, UserRepository};
pub use models::{Memo, MemoData, MemoId, MemoRevision, Pagination, User, UserData, UserId};
