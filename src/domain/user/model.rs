use chrono::{DateTime, Utc};

/// User role with a fixed total order: `Admin > Moderator > User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Moderator,
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

impl UserRole {
    /// Numeric rank used for permission comparison.
    pub fn rank(self) -> u8 {
        match self {
            Self::Admin => 3,
            Self::Moderator => 2,
            Self::User => 1,
        }
    }
}

/// User model
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Check whether a user's role grants at least `required_role`.
pub fn has_permission(user: &User, required_role: UserRole) -> bool {
    user.role.rank() >= required_role.rank()
}
