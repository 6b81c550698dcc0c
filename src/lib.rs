//! # Veridian Identity
//!
//! Embeddable identity and session management library.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities (users, sessions), the role hierarchy and
//!   repository traits
//! - **application**: Business logic — the [`AuthService`] use-cases
//! - **infrastructure**: External concerns (SeaORM persistence, crypto,
//!   in-memory storage)
//! - **shared**: Cross-cutting types (errors, pagination, numeric summaries)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use veridian_identity::{
//!     AppConfig, AuthService, InMemorySessionRepository, InMemoryUserRepository,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let service = AuthService::new(
//!         Arc::new(InMemoryUserRepository::new()),
//!         Arc::new(InMemorySessionRepository::new()),
//!         &config.security,
//!     );
//!
//!     service.register("admin@example.com", "change-me-please", None).await?;
//!     if let Some(user) = service.login("admin@example.com", "change-me-please").await? {
//!         let token = service.create_session(&user.id).await?;
//!         println!("session token: {token}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, init_tracing, AppConfig, API_VERSION, MAX_RETRIES};

// Re-export core domain types for easy access
pub use domain::{has_permission, DomainError, DomainResult, Session, User, UserRole};

pub use application::identity::AuthService;

pub use infrastructure::{
    init_database, DatabaseConfig, InMemorySessionRepository, InMemoryUserRepository,
    SessionRepository, UserRepository,
};

pub use shared::{summarize, AppError, DataSummary, InfraError, PaginatedResult};
