use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Not found")]
    NotFound,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Annotates the error with the layer and operation it passed through.
    #[must_use]
    pub fn context(self, context: &'static str) -> Self {
        Self::Context { context, source: Box::new(self) }
    }

    /// The innermost error beneath any number of context annotations.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Error returned to HTTP clients. Carries a fixed, client-safe message; the
/// underlying cause is logged by the handler before this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    #[must_use]
    pub const fn bad_request(message: &'static str) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message }
    }

    #[must_use]
    pub const fn internal(message: &'static str) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}
