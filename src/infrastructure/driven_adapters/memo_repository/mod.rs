//! Memo Repository Adapters

mod in_memory;
mod postgres;

pub use in_memory::InMemoryMemoRepository;
pub use postgres::PostgresMemoRepository;
