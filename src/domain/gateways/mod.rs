//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod memo_repository;
pub mod user_repository;

pub use memo_repository::{MemoListQuery, MemoRepository};
pub use user_repository::UserRepository;
