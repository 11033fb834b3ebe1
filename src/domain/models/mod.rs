//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod memo;
pub mod pagination;
pub mod user;

pub use memo::{Memo, MemoData, MemoId, MemoRevision};
pub use pagination::Pagination;
pub use user::{User, UserData, UserId};
