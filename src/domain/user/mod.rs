//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户名、出生日期的合法性约束
//! - 年龄计算（不持久化，每次读取时重新计算）

mod errors;
mod value_objects;

pub use errors::UserError;
pub use value_objects::{DateOfBirth, UserName, DOB_FORMAT};
