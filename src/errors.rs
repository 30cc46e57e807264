use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("invalid json")]
    Decode(#[source] JsonRejection),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::Decode(_) => (StatusCode::BAD_REQUEST, "invalid json".into()),
            Error::NotFound => (StatusCode::NOT_FOUND, "not found".into()),
            Error::Store(err) => {
                tracing::error!("store error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
            Error::Migrate(err) => {
                tracing::error!("migrate error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
            Error::Io(err) => {
                tracing::error!("io error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
