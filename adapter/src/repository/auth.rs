use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
    user::UserCredential,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::user::UserCredentialRow, ConnectionPool},
    redis::RedisClient,
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let value = self.kv.get(&session_key(access_token)).await?;
        value
            .map(|id| {
                id.parse::<UserId>()
                    .map_err(|e| AppError::ConversionEntityError(e.to_string()))
            })
            .transpose()
    }

    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserCredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, username, password_hash, role
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // 未知のユーザーと誤ったパスワードで応答を変えない
        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        let credential = UserCredential::try_from(row)?;
        let valid = bcrypt::verify(password, &credential.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(credential.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let token = AccessToken::generate();
        self.kv
            .set_ex(&session_key(&token), &event.user_id.to_string(), self.ttl)
            .await?;
        Ok(token)
    }

    async fn delete_token(&self, access_token: &AccessToken) -> AppResult<()> {
        self.kv.delete(&session_key(access_token)).await
    }
}

fn session_key(token: &AccessToken) -> String {
    format!("session:{}", token.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_keys_are_namespaced_by_token() {
        let token = AccessToken("abc123".into());
        assert_eq!(session_key(&token), "session:abc123");
    }
}
