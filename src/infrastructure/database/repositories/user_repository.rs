use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, GetUserDto, User, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::database::entities::user;
use crate::shared::PaginatedResult;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Moderator => UserRole::Moderator,
        user::UserRole::User => UserRole::User,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Moderator => user::UserRole::Moderator,
        UserRole::User => user::UserRole::User,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
        last_login_at: model.last_login_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let role = dto.role.map_or(user::UserRole::User, domain_role_to_entity);

        let new_user = user::ActiveModel {
            id: Set(id),
            email: Set(dto.email),
            password_hash: Set(dto.password_hash),
            role: Set(role),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
        };

        let model = new_user.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("Email already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(user_model_to_domain(model))
    }

    async fn list_users(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<User>> {
        let page = dto.page.unwrap_or(1).max(1);
        let page_size = dto.page_size.unwrap_or(20).clamp(1, 100);

        let mut query = user::Entity::find();

        if let Some(ref search) = dto.search {
            query = query.filter(user::Column::Email.contains(search.clone()));
        }
        if let Some(role) = dto.role {
            query = query.filter(user::Column::Role.eq(domain_role_to_entity(role)));
        }

        query = query.order_by_desc(user::Column::CreatedAt);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = ((page - 1) * page_size) as u64;
        let models = query
            .offset(offset)
            .limit(page_size as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<User> = models.into_iter().map(user_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn update_user_password(&self, id: &str, new_password_hash: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(new_password_hash.to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }

    async fn touch_last_login(&self, id: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: user::ActiveModel = existing.into();
        active.last_login_at = Set(Some(Utc::now()));
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm_migration::MigratorTrait;

    async fn setup() -> DatabaseConnection {
        let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = sea_orm::Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn dto(email: &str) -> CreateUserDto {
        CreateUserDto {
            email: email.to_string(),
            role: None,
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let repo = UserRepository::new(setup().await);

        let created = repo.create_user(dto("mira@example.com")).await.unwrap();
        assert_eq!(created.role, UserRole::User);
        assert!(created.is_active);

        let by_email = repo
            .get_user_by_email("mira@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);

        let by_id = repo.get_user_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "mira@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = UserRepository::new(setup().await);

        repo.create_user(dto("dup@example.com")).await.unwrap();
        let err = repo.create_user(dto("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_list_users_filters_by_role() {
        let repo = UserRepository::new(setup().await);

        repo.create_user(CreateUserDto {
            email: "root@example.com".to_string(),
            role: Some(UserRole::Admin),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();
        repo.create_user(dto("plain@example.com")).await.unwrap();

        let admins = repo
            .list_users(GetUserDto {
                role: Some(UserRole::Admin),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(admins.total, 1);
        assert_eq!(admins.items[0].email, "root@example.com");
    }

    #[tokio::test]
    async fn test_touch_last_login_and_delete() {
        let repo = UserRepository::new(setup().await);
        let created = repo.create_user(dto("t@example.com")).await.unwrap();
        assert!(created.last_login_at.is_none());

        repo.touch_last_login(&created.id).await.unwrap();
        let refreshed = repo.get_user_by_id(&created.id).await.unwrap().unwrap();
        assert!(refreshed.last_login_at.is_some());

        repo.delete_user(&created.id).await.unwrap();
        assert!(repo.get_user_by_id(&created.id).await.unwrap().is_none());

        let err = repo.delete_user(&created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
