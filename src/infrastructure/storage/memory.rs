//! In-memory repository implementations
//!
//! DashMap-backed stand-ins for the SeaORM repositories, used by tests
//! and local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, GetUserDto, Session, SessionRepositoryInterface,
    User, UserRepositoryInterface,
};
use crate::shared::PaginatedResult;

/// In-memory user repository keyed by user ID.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        if self.users.iter().any(|u| u.email == dto.email) {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: dto.email,
            password_hash: dto.password_hash,
            role: dto.role.unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn list_users(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<User>> {
        let page = dto.page.unwrap_or(1).max(1);
        let page_size = dto.page_size.unwrap_or(20).clamp(1, 100);

        let mut matches: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|u| dto.search.as_deref().map_or(true, |s| u.email.contains(s)))
            .filter(|u| dto.role.map_or(true, |r| u.role == r))
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let offset = ((page - 1) * page_size) as usize;
        let items: Vec<User> = matches
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.value().clone()))
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn update_user_password(&self, id: &str, new_password_hash: &str) -> DomainResult<()> {
        let Some(mut user) = self.users.get_mut(id) else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };
        user.password_hash = new_password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn touch_last_login(&self, id: &str) -> DomainResult<()> {
        let Some(mut user) = self.users.get_mut(id) else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };
        user.last_login_at = Some(Utc::now());
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        self.users.remove(id).ok_or_else(|| DomainError::NotFound {
            entity: "User",
            field: "id",
            value: id.to_string(),
        })?;
        Ok(())
    }
}

/// In-memory session repository keyed by token.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepositoryInterface for InMemorySessionRepository {
    async fn insert_session(&self, session: Session) -> DomainResult<()> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get_session(&self, id: &str) -> DomainResult<Option<Session>> {
        Ok(self.sessions.get(id).map(|s| s.clone()))
    }

    async fn delete_session(&self, id: &str) -> DomainResult<()> {
        self.sessions.remove(id);
        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: &str) -> DomainResult<u64> {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.user_id != user_id);
        Ok((before - self.sessions.len()) as u64)
    }

    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.expires_at > now);
        Ok((before - self.sessions.len()) as u64)
    }
}
