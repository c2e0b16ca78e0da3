use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    id::UserId,
    role::Role,
    user::{User, UserCredential},
};
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> AppResult<Self> {
        let UserRow {
            user_id,
            username,
            email,
            role,
            created_at,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        Ok(User {
            user_id,
            username,
            email,
            role,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl TryFrom<UserCredentialRow> for UserCredential {
    type Error = AppError;

    fn try_from(value: UserCredentialRow) -> AppResult<Self> {
        let UserCredentialRow {
            user_id,
            username,
            password_hash,
            role,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        Ok(UserCredential {
            user_id,
            username,
            password_hash,
            role,
        })
    }
}
