use axum::{
    Extension, Json, Router,
    extract::State,
    middleware,
    response::IntoResponse,
    routing::post,
};
use axum_extra::extract::WithRejection;
use coursehub_account::{SigninInput, SignupInput};
use coursehub_course::CreateCourseInput;
use coursehub_shared::account::Role;
use serde_json::json;

use super::{AppState, account};
use crate::error::AppError;
use crate::middleware::{Requester, gate_middleware};

/// Routes mounted under `/admin`; everything but signup and signin sits
/// behind the admin gate.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/courses", post(create_course).get(list_courses))
        .route_layer(middleware::from_fn_with_state(
            state.gate(Role::Admin),
            gate_middleware,
        ))
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

async fn signup(
    State(command): State<coursehub_account::Command>,
    input: WithRejection<Json<SignupInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    account::signup(Role::Admin, command, input).await
}

async fn signin(
    State(command): State<coursehub_account::Command>,
    input: WithRejection<Json<SigninInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    account::signin(Role::Admin, command, input).await
}

async fn create_course(
    State(command): State<coursehub_course::Command>,
    Extension(requester): Extension<Requester>,
    WithRejection(Json(input), _): WithRejection<Json<CreateCourseInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = command
        .create(&requester.username, input)
        .await
        .map_err(AppError::Course)?;

    tracing::info!(course_id = %course_id, created_by = %requester.username, "Course created");

    Ok(Json(json!({
        "message": "Course created successfully",
        "courseId": course_id,
    })))
}

async fn list_courses(
    State(command): State<coursehub_course::Command>,
) -> Result<impl IntoResponse, AppError> {
    let courses = command.list_all().await.map_err(AppError::Course)?;

    Ok(Json(json!({ "courses": courses })))
}
