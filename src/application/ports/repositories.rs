//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 用户实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// User Repository Port
///
/// 每个方法只执行一条 SQL 语句，不包含业务规则。
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入用户，返回包含自增 id 的记录
    async fn create(&self, name: &str, date_of_birth: NaiveDate)
        -> Result<UserRecord, RepositoryError>;

    /// 根据 ID 查找用户，不存在时返回 `NotFound`
    async fn find_by_id(&self, id: i64) -> Result<UserRecord, RepositoryError>;

    /// 按 id 升序分页查询，超出范围时返回空列表
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<UserRecord>, RepositoryError>;

    /// 覆盖更新 name 和 dob，不存在时返回 `NotFound`
    async fn update(
        &self,
        id: i64,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UserRecord, RepositoryError>;

    /// 删除用户（不检查影响行数，删除不存在的 id 视为成功）
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
