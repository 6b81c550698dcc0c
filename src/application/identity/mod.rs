//! Identity module — user management & authentication
//!
//! Contains the `AuthService` which orchestrates the user-related
//! use-cases: login, registration, password changes and sessions.

pub mod service;

pub use service::{role_to_str, str_to_role, AuthService};
