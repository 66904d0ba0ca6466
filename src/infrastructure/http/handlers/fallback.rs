//! 兜底处理：未知路由与 handler panic 也返回统一的错误信封

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::infrastructure::http::error::ApiError;

/// 未匹配路由
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found")
}

/// `CatchPanicLayer` 回调
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal {
        message: "internal server error",
        detail,
    }
    .into_response()
}
