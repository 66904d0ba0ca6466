//! User HTTP Handlers
//!
//! - POST   /users       创建
//! - GET    /users       分页列表
//! - GET    /users/:id   详情
//! - PUT    /users/:id   覆盖更新
//! - DELETE /users/:id   删除

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateUser, DeleteUser, GetUser, ListUsers, UpdateUser};
use crate::infrastructure::http::dto::{
    describe_field_errors, CreateUserRequest, ListUsersParams, ListUsersResponse, UserResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// 输入解析
// ============================================================================

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::InvalidId(e.body_text()))
}

/// 解析并校验请求体
///
/// 请求体为 JSON `null` 时视为空对象，由字段校验报告缺失。
fn parse_body(
    body: Result<Json<Option<CreateUserRequest>>, JsonRejection>,
) -> Result<CreateUserRequest, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let req = req.unwrap_or_default();

    let errors = req.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(describe_field_errors(&errors)));
    }

    Ok(req)
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Option<CreateUserRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let req = parse_body(body)?;

    let command = CreateUser {
        name: req.name,
        dob: req.dob,
    };

    let result = state
        .create_user_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, "failed to create user"))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(result))))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_id(path)?;

    let result = state
        .get_user_handler
        .handle(GetUser { user_id })
        .await
        .map_err(|e| ApiError::from_application(e, "failed to fetch user"))?;

    Ok(Json(UserResponse::from(result)))
}

/// 获取用户列表
///
/// 查询参数从不导致请求失败；响应中的 page / limit 回显请求参数，实际查询使用修正后的值。
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListUsersParams>, QueryRejection>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let page = params.page();
    let limit = params.limit();

    let result = state
        .list_users_handler
        .handle(ListUsers { page, limit })
        .await
        .map_err(|e| ApiError::from_application(e, "failed to fetch users"))?;

    Ok(Json(ListUsersResponse {
        page,
        limit,
        data: result.into_iter().map(UserResponse::from).collect(),
    }))
}

/// 覆盖更新用户
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Option<CreateUserRequest>>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_id(path)?;
    let req = parse_body(body)?;

    let command = UpdateUser {
        user_id,
        name: req.name,
        dob: req.dob,
    };

    let result = state
        .update_user_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, "failed to update user"))?;

    Ok(Json(UserResponse::from(result)))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let user_id = parse_id(path)?;

    state
        .delete_user_handler
        .handle(DeleteUser { user_id })
        .await
        .map_err(|e| ApiError::from_application(e, "failed to delete user"))?;

    Ok(StatusCode::NO_CONTENT)
}
