//! Session aggregate

pub mod model;
pub mod repository;

pub use model::Session;
pub use repository::SessionRepositoryInterface;
