use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::Session;
use crate::domain::DomainResult;

#[async_trait]
pub trait SessionRepositoryInterface: Send + Sync {
    async fn insert_session(&self, session: Session) -> DomainResult<()>;

    async fn get_session(&self, id: &str) -> DomainResult<Option<Session>>;

    /// Delete a session by token. Unknown tokens are a no-op.
    async fn delete_session(&self, id: &str) -> DomainResult<()>;

    /// Delete every session belonging to a user, returning the count.
    async fn delete_sessions_for_user(&self, user_id: &str) -> DomainResult<u64>;

    /// Delete sessions expired at `now`, returning the count.
    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}
