//! HTTP Handlers

pub mod memos;
pub mod users;
