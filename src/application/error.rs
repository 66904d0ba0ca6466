//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，HTTP 层对其做穷尽匹配

use thiserror::Error;

use crate::domain::UserError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 出生日期不是 `YYYY-MM-DD`
    #[error("invalid date of birth: {0}")]
    InvalidDateOfBirth(String),

    /// 用户不存在
    #[error("User not found: {0}")]
    NotFound(i64),

    /// 存储或其他内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        match err {
            crate::application::ports::RepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<UserError> for ApplicationError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidDateOfBirth(input) => Self::InvalidDateOfBirth(input),
            other => Self::Internal(other.to_string()),
        }
    }
}
