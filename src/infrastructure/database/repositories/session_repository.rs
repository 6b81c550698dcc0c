use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{DomainError, DomainResult, Session, SessionRepositoryInterface};
use crate::infrastructure::database::entities::session;

pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn session_model_to_domain(model: session::Model) -> Session {
    Session {
        id: model.id,
        user_id: model.user_id,
        created_at: model.created_at,
        expires_at: model.expires_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl SessionRepositoryInterface for SessionRepository {
    async fn insert_session(&self, s: Session) -> DomainResult<()> {
        let active = session::ActiveModel {
            id: Set(s.id),
            user_id: Set(s.user_id),
            created_at: Set(s.created_at),
            expires_at: Set(s.expires_at),
        };
        active.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn get_session(&self, id: &str) -> DomainResult<Option<Session>> {
        let model = session::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(session_model_to_domain))
    }

    async fn delete_session(&self, id: &str) -> DomainResult<()> {
        session::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: &str) -> DomainResult<u64> {
        let result = session::Entity::delete_many()
            .filter(session::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = session::Entity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateUserDto, UserRepositoryInterface};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::UserRepository;
    use chrono::Duration;
    use sea_orm_migration::MigratorTrait;

    async fn setup() -> (DatabaseConnection, String) {
        let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = sea_orm::Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let users = UserRepository::new(db.clone());
        let user = users
            .create_user(CreateUserDto {
                email: "owner@example.com".to_string(),
                role: None,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();

        (db, user.id)
    }

    fn session(token: &str, user_id: &str, expires_in: Duration) -> Session {
        let now = Utc::now();
        Session {
            id: token.to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            expires_at: now + expires_in,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_session() {
        let (db, user_id) = setup().await;
        let repo = SessionRepository::new(db);

        let token = "a".repeat(32);
        repo.insert_session(session(&token, &user_id, Duration::hours(1)))
            .await
            .unwrap();

        let found = repo.get_session(&token).await.unwrap().unwrap();
        assert_eq!(found.user_id, user_id);

        assert!(repo.get_session("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_session_is_idempotent() {
        let (db, user_id) = setup().await;
        let repo = SessionRepository::new(db);

        let token = "b".repeat(32);
        repo.insert_session(session(&token, &user_id, Duration::hours(1)))
            .await
            .unwrap();

        repo.delete_session(&token).await.unwrap();
        assert!(repo.get_session(&token).await.unwrap().is_none());

        // Unknown token deletes quietly
        repo.delete_session(&token).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_expired_keeps_live_sessions() {
        let (db, user_id) = setup().await;
        let repo = SessionRepository::new(db);

        repo.insert_session(session(&"c".repeat(32), &user_id, Duration::hours(-1)))
            .await
            .unwrap();
        repo.insert_session(session(&"d".repeat(32), &user_id, Duration::hours(1)))
            .await
            .unwrap();

        let purged = repo.delete_expired_sessions(Utc::now()).await.unwrap();
        assert_eq!(purged, 1);
        assert!(repo.get_session(&"c".repeat(32)).await.unwrap().is_none());
        assert!(repo.get_session(&"d".repeat(32)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_sessions_for_user() {
        let (db, user_id) = setup().await;
        let repo = SessionRepository::new(db);

        repo.insert_session(session(&"e".repeat(32), &user_id, Duration::hours(1)))
            .await
            .unwrap();
        repo.insert_session(session(&"f".repeat(32), &user_id, Duration::hours(1)))
            .await
            .unwrap();

        let removed = repo.delete_sessions_for_user(&user_id).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(repo.delete_sessions_for_user(&user_id).await.unwrap(), 0);
    }
}
