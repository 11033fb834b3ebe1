//! User Use Cases
//!
//! Pass-through listing and creation of users.

mod create_user;
mod list_users;

pub use create_user::CreateUserUseCase;
pub use list_users::ListUsersUseCase;
