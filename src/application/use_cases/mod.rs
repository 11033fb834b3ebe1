//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod memos;
pub mod users;

pub use memos::{
    CreateMemoUseCase, DeleteMemoUseCase, GetMemoUseCase, ListMemosUseCase, UpdateMemoUseCase,
};
pub use users::{CreateUserUseCase, ListUsersUseCase};
