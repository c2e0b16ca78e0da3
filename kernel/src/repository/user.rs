use async_trait::async_trait;
use mockall::automock;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{event::CreateUser, User},
};

#[automock]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザーを登録する。username/email の重複は ConflictError になる
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    /// 管理者アカウントを冪等に用意する。既に存在する場合は何もしない
    async fn ensure_admin(&self, event: CreateUser) -> AppResult<()>;
}
