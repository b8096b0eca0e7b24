use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::ChannelError;
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Error returned by HTTP handlers, rendered as `{ "error": code, "message": text }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// Provider keeps answering with nothing; almost always a bad key or quota.
    #[error("{0}")]
    ProviderMisconfigured(String),
    #[error("{0}")]
    ProviderUnavailable(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ProviderMisconfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "already_exists",
            AppError::ProviderMisconfigured(_) => "provider_misconfigured",
            AppError::ProviderUnavailable(_) => "provider_unavailable",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl From<ChannelError> for AppError {
    fn from(e: ChannelError) -> Self {
        match e {
            ChannelError::InvalidId => AppError::bad_request(e.to_string()),
            ChannelError::AlreadyExists(_) => AppError::conflict(e.to_string()),
            ChannelError::NotFound(_) => AppError::not_found(e.to_string()),
            ChannelError::ProviderMisconfigured(_) => AppError::ProviderMisconfigured(e.to_string()),
            ChannelError::ProviderUnavailable(_) => AppError::ProviderUnavailable(e.to_string()),
            ChannelError::Database(db) => {
                tracing::error!("Database error: {}", db);
                AppError::internal("Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{} ({}): {}", status, self.code(), self);
        }
        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_error_mapping() {
        let cases = [
            (ChannelError::InvalidId, StatusCode::BAD_REQUEST),
            (
                ChannelError::AlreadyExists("UCabc".into()),
                StatusCode::CONFLICT,
            ),
            (ChannelError::NotFound("UCabc".into()), StatusCode::NOT_FOUND),
            (
                ChannelError::ProviderMisconfigured("empty".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ChannelError::ProviderUnavailable("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ChannelError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(AppError::from(error).status(), expected);
        }
    }

    #[test]
    fn test_misconfigured_is_distinct_from_not_found() {
        let misconfigured = AppError::from(ChannelError::ProviderMisconfigured("x".into()));
        let not_found = AppError::from(ChannelError::NotFound("x".into()));
        assert_ne!(misconfigured.code(), not_found.code());
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let err = AppError::from(ChannelError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[tokio::test]
    async fn test_json_rejection_is_bad_request() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let rejection = axum::Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        let err = AppError::from(rejection);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "bad_request");
    }
}
