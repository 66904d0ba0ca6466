//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("无效的用户名: {0}")]
    InvalidName(String),

    #[error("无效的出生日期: {0}")]
    InvalidDateOfBirth(String),
}
