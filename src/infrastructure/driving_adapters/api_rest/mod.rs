//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod link;
pub mod middleware;
pub mod router;

use std::sync::Arc;

use crate::application::use_cases::memos::{
    CreateMemoUseCase, DeleteMemoUseCase, GetMemoUseCase, ListMemosUseCase, UpdateMemoUseCase,
};
use crate::application::use_cases::users::{CreateUserUseCase, ListUsersUseCase};
use crate::domain::gateways::{MemoRepository, UserRepository};

pub use router::build_router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_memo_use_case: Arc<CreateMemoUseCase>,
    pub list_memos_use_case: Arc<ListMemosUseCase>,
    pub get_memo_use_case: Arc<GetMemoUseCase>,
    pub update_memo_use_case: Arc<UpdateMemoUseCase>,
    pub delete_memo_use_case: Arc<DeleteMemoUseCase>,
    pub list_users_use_case: Arc<ListUsersUseCase>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
}

impl AppState {
    /// Wire every use case to the given repositories
    #[must_use]
    pub fn new(memo_repository: Arc<dyn MemoRepository>, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            create_memo_use_case: Arc::new(CreateMemoUseCase::new(memo_repository.clone())),
            list_memos_use_case: Arc::new(ListMemosUseCase::new(memo_repository.clone())),
            get_memo_use_case: Arc::new(GetMemoUseCase::new(memo_repository.clone())),
            update_memo_use_case: Arc::new(UpdateMemoUseCase::new(memo_repository.clone())),
            delete_memo_use_case: Arc::new(DeleteMemoUseCase::new(memo_repository)),
            list_users_use_case: Arc::new(ListUsersUseCase::new(user_repository.clone())),
            create_user_use_case: Arc::new(CreateUserUseCase::new(user_repository)),
        }
    }
}
