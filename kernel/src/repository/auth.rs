use async_trait::async_trait;
use mockall::automock;
use shared::error::AppResult;

use crate::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};

#[automock]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// セッショントークンからユーザーIDを引く
    async fn fetch_user_id_from_token(&self, access_token: &AccessToken)
        -> AppResult<Option<UserId>>;
    /// ユーザー名とパスワードを検証する。未知のユーザーと誤ったパスワードは
    /// 区別せず、同じ UnauthenticatedError を返す
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId>;
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    async fn delete_token(&self, access_token: &AccessToken) -> AppResult<()>;
}
