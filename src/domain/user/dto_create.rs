use super::UserRole;

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub email: String,
    pub role: Option<UserRole>,
    pub password_hash: String,
}
