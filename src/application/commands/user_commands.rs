//! User Commands

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    /// 原始 `YYYY-MM-DD` 字符串，由 handler 解析
    pub dob: String,
}

/// 覆盖更新用户命令（name + dob 全量替换）
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: i64,
    pub name: String,
    pub dob: String,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: i64,
}
