use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let hashed = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (user_id, username, email, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING user_id, username, email, role, created_at
            "#,
        )
        .bind(user_id)
        .bind(&event.username)
        .bind(&event.email)
        .bind(&hashed)
        .bind(event.role.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(map_unique_violation)?;

        row.try_into()
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, username, email, role, created_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn ensure_admin(&self, event: CreateUser) -> AppResult<()> {
        let hashed = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        // 起動のたびに呼ばれるため冪等にしておく
        sqlx::query(
            r#"
                INSERT INTO users (user_id, username, email, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(UserId::new())
        .bind(&event.username)
        .bind(&event.email)
        .bind(&hashed)
        .bind(event.role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}

/// username/email の一意制約違反は利用者向けの重複エラーに変換する。
/// どちらの項目が衝突したかは明かさない。
fn map_unique_violation(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::ConflictError("username or email is already registered".into())
        }
        e => AppError::SpecificOperationError(e),
    }
}
