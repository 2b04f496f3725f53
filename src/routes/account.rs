//! Signup and signin, parameterized by the role whose table they touch

use axum::{Json, response::IntoResponse};
use axum_extra::extract::WithRejection;
use coursehub_account::{Command, SigninInput, SignupInput};
use coursehub_shared::account::Role;
use serde_json::json;

use crate::error::AppError;

pub async fn signup(
    role: Role,
    command: Command,
    WithRejection(Json(input), _): WithRejection<Json<SignupInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let account = command
        .signup(role, input)
        .await
        .map_err(AppError::auth(role))?;

    tracing::info!(role = %role, username = %account.username, "Account created");

    Ok(Json(json!({ "message": role.created_message() })))
}

pub async fn signin(
    role: Role,
    command: Command,
    WithRejection(Json(input), _): WithRejection<Json<SigninInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let token = command
        .signin(role, input)
        .await
        .map_err(AppError::auth(role))?;

    Ok(Json(json!({ "token": token })))
}
