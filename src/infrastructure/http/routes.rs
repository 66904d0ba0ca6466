//! HTTP Routes
//!
//! API Endpoints:
//! - /health       GET     健康检查
//! - /users        POST    创建用户
//! - /users        GET     用户列表（?page=&limit=）
//! - /users/:id    GET     用户详情
//! - /users/:id    PUT     覆盖更新
//! - /users/:id    DELETE  删除用户

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(user_routes())
        .fallback(handlers::route_not_found)
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
}
