use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use coursehub_account::{SigninInput, SignupInput};
use coursehub_shared::account::Role;
use serde_json::json;

use super::{AppState, account};
use crate::error::AppError;
use crate::middleware::{Requester, gate_middleware};
use crate::notifications::{Badge, Counter};

/// Routes mounted under `/user`; everything but signup and signin sits
/// behind the user gate.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/{course_id}", post(purchase_course))
        .route("/purchasedCourses", get(list_purchased_courses))
        .route("/notifications", get(notifications))
        .route("/notifications/messaging", post(notify_messaging))
        .route_layer(middleware::from_fn_with_state(
            state.gate(Role::User),
            gate_middleware,
        ))
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

async fn signup(
    State(command): State<coursehub_account::Command>,
    input: WithRejection<Json<SignupInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    account::signup(Role::User, command, input).await
}

async fn signin(
    State(command): State<coursehub_account::Command>,
    input: WithRejection<Json<SigninInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    account::signin(Role::User, command, input).await
}

async fn list_courses(
    State(command): State<coursehub_course::Command>,
) -> Result<impl IntoResponse, AppError> {
    let courses = command.list_published().await.map_err(AppError::Course)?;

    Ok(Json(json!({ "courses": courses })))
}

async fn purchase_course(
    State(command): State<coursehub_course::Command>,
    Extension(requester): Extension<Requester>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    command
        .purchase(&requester.username, &course_id)
        .await
        .map_err(AppError::Course)?;

    tracing::info!(course_id = %course_id, username = %requester.username, "Course purchased");

    Ok(Json(json!({ "message": "Course purchased successfully" })))
}

async fn list_purchased_courses(
    State(command): State<coursehub_course::Command>,
    Extension(requester): Extension<Requester>,
) -> Result<impl IntoResponse, AppError> {
    let courses = command
        .list_purchased(&requester.username)
        .await
        .map_err(AppError::Course)?;

    Ok(Json(json!({ "purchasedCourses": courses })))
}

async fn notifications(State(badge): State<Arc<Badge>>) -> impl IntoResponse {
    Json(badge.snapshot().await)
}

async fn notify_messaging(State(badge): State<Arc<Badge>>) -> impl IntoResponse {
    Json(badge.increment(Counter::Messaging).await)
}
