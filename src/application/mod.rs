//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（UserRepository）
//! - commands: CQRS 命令及处理器（create / update / delete）
//! - queries: CQRS 查询及处理器（get / list）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    handlers::{CreateUserHandler, DeleteUserHandler, UpdateUserHandler},
    CreateUser, DeleteUser, UpdateUser,
};

pub use error::ApplicationError;

pub use ports::{RepositoryError, UserRecord, UserRepositoryPort};

pub use queries::{
    handlers::{GetUserHandler, ListUsersHandler, UserView},
    GetUser, ListUsers, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
