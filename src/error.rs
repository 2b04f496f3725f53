use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coursehub_shared::{Error, account::Role};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Raised on a role's signup, signin or gate; wording depends on the role.
    #[error("{role} auth error: {error}")]
    Auth { role: Role, error: Error },

    #[error("course error: {0}")]
    Course(Error),

    #[error("request body rejected: {0}")]
    Body(#[from] JsonRejection),
}

impl AppError {
    pub fn auth(role: Role) -> impl FnOnce(Error) -> Self {
        move |error| AppError::Auth { role, error }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Auth { role, error } => match error {
                Error::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid credentials".to_string()),
                Error::AlreadyExists | Error::DuplicateKey => (
                    StatusCode::BAD_REQUEST,
                    role.already_exists_message().to_string(),
                ),
                Error::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
                }
                Error::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
                e if e.is_unauthenticated() => (
                    StatusCode::UNAUTHORIZED,
                    role.unauthenticated_message().to_string(),
                ),
                e => internal(e),
            },
            AppError::Course(error) => match error {
                Error::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid course".to_string()),
                Error::NotFound => (StatusCode::NOT_FOUND, "Course not found".to_string()),
                e => internal(e),
            },
            // Syntax, type and content-type failures all read as a bad request
            AppError::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        }
    }
}

fn internal(error: &Error) -> (StatusCode, String) {
    tracing::error!(error = %error, "Unexpected error while handling request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        (status, Json(json!({ "message": message }))).into_response()
    }
}
