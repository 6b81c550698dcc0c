//! Authentication service — application-layer orchestration
//!
//! All login and session business logic lives here. Embedders construct
//! the service over any pair of repository implementations.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::config::SecuritySettings;
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, Session, SessionRepositoryInterface, User,
    UserRepositoryInterface, UserRole,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::crypto::token::generate_session_token;

/// Authentication service — orchestrates login, registration and the
/// session lifecycle.
///
/// Generic over the repository interfaces so it stays decoupled from
/// the concrete persistence layer.
pub struct AuthService<U: UserRepositoryInterface, S: SessionRepositoryInterface> {
    users: Arc<U>,
    sessions: Arc<S>,
    session_ttl: Duration,
}

impl<U: UserRepositoryInterface, S: SessionRepositoryInterface> AuthService<U, S> {
    pub fn new(users: Arc<U>, sessions: Arc<S>, security: &SecuritySettings) -> Self {
        Self {
            users,
            sessions,
            session_ttl: Duration::seconds(security.session_ttl_secs),
        }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate a user by email + password.
    ///
    /// Returns `Ok(None)` for an unknown email, a wrong password or a
    /// disabled account; the caller cannot tell which. Empty credentials
    /// are the only error case.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Option<User>> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let Some(user) = self.users.get_user_by_email(email).await? else {
            debug!(email, "login rejected: unknown email");
            return Ok(None);
        };

        if !user.is_active {
            debug!(user_id = %user.id, "login rejected: account disabled");
            return Ok(None);
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            debug!(user_id = %user.id, "login rejected: bad password");
            return Ok(None);
        }

        // Last-login bookkeeping must not fail the login itself.
        if let Err(e) = self.users.touch_last_login(&user.id).await {
            warn!(user_id = %user.id, error = %e, "failed to record last login");
        }

        info!(user_id = %user.id, "user authenticated");
        Ok(Some(user))
    }

    // ── Sessions ────────────────────────────────────────────────

    /// Create a new session for a user and return the opaque token.
    pub async fn create_session(&self, user_id: &str) -> DomainResult<String> {
        let token = generate_session_token();
        let now = Utc::now();

        let session = Session {
            id: token.clone(),
            user_id: user_id.to_string(),
            created_at: now,
            expires_at: now + self.session_ttl,
        };
        self.sessions.insert_session(session).await?;

        debug!(user_id, "session created");
        Ok(token)
    }

    /// Look up a session by token. Unknown and expired tokens are absent.
    pub async fn validate_session(&self, token: &str) -> DomainResult<Option<Session>> {
        let Some(session) = self.sessions.get_session(token).await? else {
            return Ok(None);
        };
        if session.is_expired(Utc::now()) {
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Delete a session. Unknown tokens are a no-op.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.sessions.delete_session(token).await
    }

    /// Remove all expired sessions, returning the number deleted.
    pub async fn purge_expired_sessions(&self) -> DomainResult<u64> {
        let purged = self.sessions.delete_expired_sessions(Utc::now()).await?;
        if purged > 0 {
            info!(purged, "expired sessions removed");
        }
        Ok(purged)
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new user (default role: User).
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Option<UserRole>,
    ) -> DomainResult<User> {
        if !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        if password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if self.users.get_user_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let user = self
            .users
            .create_user(CreateUserDto {
                email: email.to_string(),
                role,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "new user registered");
        Ok(user)
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Change a user's password. Verifies the current password first and
    /// revokes every open session for the user.
    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if new_password.len() < 8 {
            return Err(DomainError::Validation(
                "New password must be at least 8 characters".to_string(),
            ));
        }

        let user = self
            .users
            .get_user_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })?;

        let valid = verify_password(current_password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized(
                "Invalid current password".to_string(),
            ));
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        self.users.update_user_password(user_id, &new_hash).await?;
        self.sessions.delete_sessions_for_user(user_id).await?;

        info!(user_id, "password changed");
        Ok(())
    }
}

// ── Helpers ─────────────────────────────────────────────────────

/// Stable string form of a role, as stored outside the domain layer.
pub fn role_to_str(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Moderator => "moderator",
        UserRole::User => "user",
    }
}

/// Parse a role string. Unknown values map to the lowest role.
pub fn str_to_role(s: &str) -> UserRole {
    match s.to_lowercase().as_str() {
        "admin" => UserRole::Admin,
        "moderator" => UserRole::Moderator,
        _ => UserRole::User,
    }
}
