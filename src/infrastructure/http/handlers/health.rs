//! Health Handler
//!
//! 存活探针，不访问数据库

use axum::Json;
use serde::Serialize;

/// Health 响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health endpoint - 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
