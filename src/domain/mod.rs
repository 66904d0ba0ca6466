//! Domain Layer - 领域层
//!
//! User Context: 用户资料（姓名、出生日期）与派生年龄

pub mod user;

pub use user::{DateOfBirth, UserError, UserName};
