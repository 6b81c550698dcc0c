pub mod memory;

pub use memory::{InMemorySessionRepository, InMemoryUserRepository};
