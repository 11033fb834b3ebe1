//! Memo Use Cases
//!
//! Validation, pagination and not-found mapping for memos.

mod create_memo;
mod delete_memo;
mod get_memo;
mod list_memos;
mod update_memo;
mod validation;

pub use create_memo::CreateMemoUseCase;
pub use delete_memo::DeleteMemoUseCase;
pub use get_memo::GetMemoUseCase;
pub use list_memos::{ListMemosUseCase, MemoListing, MemoQuery};
pub use update_memo::UpdateMemoUseCase;
