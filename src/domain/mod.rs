pub mod session;
pub mod user;

// Re-export commonly used types
pub use session::{Session, SessionRepositoryInterface};
pub use user::{
    has_permission, CreateUserDto, GetUserDto, User, UserRepositoryInterface, UserRole,
};

// Re-export error types from shared for convenience
pub use crate::shared::{DomainError, DomainResult};
