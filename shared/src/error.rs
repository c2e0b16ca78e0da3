use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("session store error")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("password hash error")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("invalid username or password")]
    UnauthenticatedError,
    #[error("authentication is required")]
    UnauthorizedError,
    #[error("admin operation is not permitted")]
    ForbiddenOperation,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_) | AppError::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)
            | AppError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // 内部エラーの詳細はログにのみ残し、クライアントへは漏らさない
        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
            (status_code, "internal server error".to_string()).into_response()
        } else {
            (status_code, self.to_string()).into_response()
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            status_of(AppError::UnprocessableEntity("all fields are required".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::EntityNotFound("reservation not found".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::ConflictError("already registered".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::UnauthenticatedError),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::ForbiddenOperation),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn store_errors_map_to_500_with_generic_body() {
        let res = AppError::NoRowsAffectedError("no payment created".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
