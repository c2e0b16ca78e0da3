use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use kernel::model::{auth::event::CreateToken, role::Role, user::event::CreateUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        auth::{AccessTokenResponse, LoginRequest, SignupRequest},
        user::UserResponse,
    },
};

pub async fn signup(
    State(registry): State<AppRegistry>,
    Json(req): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    if req.password != req.confirm_password {
        return Err(AppError::UnprocessableEntity("passwords do not match".into()));
    }

    // 管理者アカウントはここからは登録させない
    let admin = registry.admin_config();
    if req.username == admin.username || req.email == admin.email {
        return Err(AppError::UnprocessableEntity(
            "administrator accounts cannot be registered here".into(),
        ));
    }

    let user = registry
        .user_repository()
        .create(CreateUser::new(
            req.username,
            req.email,
            req.password,
            Role::User,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.username, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;

    Ok(Json(AccessTokenResponse::new(user_id, access_token.0)))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(&user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use kernel::model::{id::UserId, user::User};

    use super::*;
    use crate::handler::test_support::TestRegistryBuilder;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            username: "juan".into(),
            email: "juan@example.com".into(),
            password: "hunter2!".into(),
            confirm_password: "hunter2!".into(),
        }
    }

    #[tokio::test]
    async fn signup_rejects_mismatched_passwords_without_touching_the_store() {
        let registry = TestRegistryBuilder::new().build();
        let mut req = signup_request();
        req.confirm_password = "something else".into();

        let res = signup(State(registry), Json(req)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[tokio::test]
    async fn signup_rejects_the_configured_admin_identity() {
        let registry = TestRegistryBuilder::new().build();
        let mut req = signup_request();
        req.email = "goparkadmin@example.com".into();

        let res = signup(State(registry), Json(req)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[tokio::test]
    async fn signup_surfaces_duplicates_as_a_conflict() {
        let mut builder = TestRegistryBuilder::new();
        builder.user.expect_create().returning(|_| {
            Err(AppError::ConflictError(
                "username or email is already registered".into(),
            ))
        });
        let registry = builder.build();

        let res = signup(State(registry), Json(signup_request())).await;
        assert!(matches!(res, Err(AppError::ConflictError(_))));
    }

    #[tokio::test]
    async fn signup_creates_a_regular_user() {
        let mut builder = TestRegistryBuilder::new();
        builder.user.expect_create().returning(|event| {
            assert_eq!(event.role, Role::User);
            Ok(User {
                user_id: UserId::new(),
                username: event.username,
                email: event.email,
                role: event.role,
                created_at: chrono::Utc::now(),
            })
        });
        let registry = builder.build();

        let res = signup(State(registry), Json(signup_request())).await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn login_issues_a_session_token() {
        let user_id = UserId::new();
        let mut builder = TestRegistryBuilder::new();
        builder
            .auth
            .expect_verify_user()
            .withf(|username, password| username == "juan" && password == "hunter2!")
            .returning(move |_, _| Ok(user_id));
        builder
            .auth
            .expect_create_token()
            .returning(|_| Ok(kernel::model::auth::AccessToken("issued".into())));
        let registry = builder.build();

        let req = LoginRequest {
            username: "juan".into(),
            password: "hunter2!".into(),
        };
        let res = login(State(registry), Json(req)).await.unwrap();
        assert_eq!(res.0.user_id, user_id);
        assert_eq!(res.0.access_token, "issued");
    }

    #[tokio::test]
    async fn login_does_not_reveal_whether_the_user_exists() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .auth
            .expect_verify_user()
            .returning(|_, _| Err(AppError::UnauthenticatedError));
        let registry = builder.build();

        let req = LoginRequest {
            username: "nobody".into(),
            password: "wrong".into(),
        };
        let res = login(State(registry), Json(req)).await;
        // 未知のユーザーも誤ったパスワードも同じエラーになる
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));
    }
}
