//! User Queries

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 每页条数上限
pub const MAX_PAGE_SIZE: i64 = 50;

/// 获取单个用户
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: i64,
}

/// 分页获取用户列表
#[derive(Debug, Clone)]
pub struct ListUsers {
    pub page: i64,
    pub limit: i64,
}

impl ListUsers {
    /// 页码，小于 1 时取 1
    pub fn effective_page(&self) -> i64 {
        self.page.max(1)
    }

    /// 每页条数，不在 `[1, MAX_PAGE_SIZE]` 内时回落到默认值（不是截断到上限）
    pub fn effective_limit(&self) -> i64 {
        if (1..=MAX_PAGE_SIZE).contains(&self.limit) {
            self.limit
        } else {
            DEFAULT_PAGE_SIZE
        }
    }

    pub fn offset(&self) -> i64 {
        (self.effective_page() - 1).saturating_mul(self.effective_limit())
    }
}
