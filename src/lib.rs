//! Memo API
//!
//! A REST service for short tagged memos, with offset pagination, tag
//! filtering and `Link` header navigation, plus a small user directory.
//! Organized along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
