//! HTTP Error Handling
//!
//! 应用层错误在这里被翻译为 HTTP 状态码 + 错误码

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// 错误信封 `{"error":{"code":..,"message":..}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

/// 错误码定义
pub mod code {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INVALID_ID: &str = "INVALID_ID";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

pub const INVALID_DOB_MESSAGE: &str = "dob must be in YYYY-MM-DD format";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体无法解析，附带解析错误（只写日志）
    InvalidRequest(String),
    /// 路径参数 id 无法解析
    InvalidId(String),
    /// 字段校验失败，消息返回给客户端
    Validation(String),
    NotFound(&'static str),
    /// `message` 返回给客户端，`detail` 只写日志
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// 把应用层错误翻译为 API 错误
    ///
    /// `failure` 是 500 时返回给客户端的固定文案。
    pub fn from_application(err: ApplicationError, failure: &'static str) -> Self {
        match err {
            ApplicationError::InvalidDateOfBirth(input) => {
                tracing::debug!(dob = %input, "Rejected date of birth");
                ApiError::Validation(INVALID_DOB_MESSAGE.to_string())
            }
            ApplicationError::NotFound(_) => ApiError::NotFound("user not found"),
            ApplicationError::Internal(detail) => ApiError::Internal {
                message: failure,
                detail,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::InvalidRequest(detail) => {
                tracing::warn!(error = %detail, "Invalid request body");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(code::INVALID_REQUEST, "invalid request body"),
                )
            }
            ApiError::InvalidId(detail) => {
                tracing::warn!(error = %detail, "Invalid user id");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(code::INVALID_ID, "invalid user id"),
                )
            }
            ApiError::Validation(msg) => {
                tracing::warn!(error = %msg, "Validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(code::VALIDATION_ERROR, msg),
                )
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = msg, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(code::NOT_FOUND, msg),
                )
            }
            ApiError::Internal { message, detail } => {
                tracing::error!(error = %detail, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(code::INTERNAL_ERROR, message),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_dob_maps_to_validation_error() {
        let err = ApiError::from_application(
            ApplicationError::InvalidDateOfBirth("31-12-1990".to_string()),
            "failed to create user",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], INVALID_DOB_MESSAGE);
    }

    #[tokio::test]
    async fn test_not_found() {
        let response =
            ApiError::from_application(ApplicationError::NotFound(3), "failed to fetch user")
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "user not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::from_application(
            ApplicationError::internal("Database error: disk I/O error"),
            "failed to create user",
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "failed to create user");
        assert!(!body.to_string().contains("disk I/O"));
    }

    #[tokio::test]
    async fn test_invalid_request_hides_parser_detail() {
        let response =
            ApiError::InvalidRequest("expected value at line 1 column 1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
        assert_eq!(body["error"]["message"], "invalid request body");
    }
}
