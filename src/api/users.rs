use crate::api::AppState;
use crate::api::schemas::users::{MessageResponse, UserPayload, UserResponse};
use crate::domain::user::User;
use crate::error::{ApiError, AppError};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

const INVALID_BODY: &str = "invalid request body";

type ApiResult<T> = Result<T, ApiError>;

fn decode_user(payload: Result<Json<UserPayload>, JsonRejection>) -> Result<User, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    User::try_from(payload).map_err(AppError::Validation)
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let mut user = decode_user(payload).map_err(|e| {
        tracing::warn!(error = %e, "http - v1 - create user");
        ApiError::bad_request(INVALID_BODY)
    })?;

    user.id = Uuid::new_v4().to_string();

    let user = state.users.create_user(user).await.map_err(|e| {
        tracing::error!(error = %e, "http - v1 - create user");
        ApiError::internal("create user service problems")
    })?;

    Ok(Json(user.into()))
}

pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<UserResponse>> {
    let user = state.users.get_user(&id).await.map_err(|e| {
        tracing::error!(error = %e, user_id = %id, "http - v1 - get user");
        ApiError::internal("get user service problems")
    })?;

    Ok(Json(user.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let mut user = decode_user(payload).map_err(|e| {
        tracing::warn!(error = %e, "http - v1 - update user");
        ApiError::bad_request(INVALID_BODY)
    })?;

    user.id = id;

    let user = state.users.update_user(user).await.map_err(|e| {
        tracing::error!(error = %e, "http - v1 - update user");
        ApiError::internal("update user service problems")
    })?;

    Ok(Json(user.into()))
}

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<MessageResponse>> {
    state.users.delete_user(&id).await.map_err(|e| {
        tracing::error!(error = %e, user_id = %id, "http - v1 - delete user");
        ApiError::internal("delete user service problems")
    })?;

    Ok(Json(MessageResponse { message: "user was successfully deleted".to_string() }))
}
