use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

use crate::auth::TokenError;
use crate::serializers::common::ApiError;

/// Every failure a route can produce. Converted into a status code and a
/// `{ "message": ... }` body at the request boundary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    /// Missing, malformed, invalid or expired credential.
    #[error("Invalid or expired token")]
    Unauthorized,

    /// Failed login. Same message for unknown email and wrong password.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::InvalidOrExpired => AppError::Unauthorized,
            TokenError::Signing(_) => AppError::Internal(e.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Db(_) | AppError::Internal(_) => {
                // details stay in the log
                error!(error = %self, "request failed");
                "Server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ApiError { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_hide_details() {
        let err = AppError::Db(DbErr::Custom("relation \"users\" does not exist".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn statuses_follow_taxonomy() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotFound("Note").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound("Note").to_string(), "Note not found");
        assert_eq!(AppError::bad("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict("taken".into()).status(), StatusCode::CONFLICT);
    }

    #[test]
    fn token_errors_collapse_to_unauthorized() {
        let err: AppError = TokenError::InvalidOrExpired.into();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
