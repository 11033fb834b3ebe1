//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod memo;
pub mod user;

pub use memo::{
    CreateMemoResponseDto, ListMemosParams, MemoListResponseDto, MemoRequestDto, MemoResponseDto,
    PaginationDto,
};
pub use user::{CreateUserDto, UserResponseDto};
