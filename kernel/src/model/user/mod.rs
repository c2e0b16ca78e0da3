use chrono::{DateTime, Utc};

use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// ログイン検証に使う資格情報。パスワードはハッシュのみ保持する。
#[derive(Debug)]
pub struct UserCredential {
    pub user_id: UserId,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
