//! user-api - 用户资料 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户名、出生日期、年龄计算
//!
//! 应用层 (application/):
//! - Ports: UserRepositoryPort
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 详情 / 分页列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + request id / 访问日志中间件
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
