//! User Query Handlers

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::application::queries::{GetUser, ListUsers};
use crate::domain::DateOfBirth;

// ============================================================================
// Response DTOs
// ============================================================================

/// 用户读模型
///
/// `age` 不落库，每次构建时根据当天日期重新计算。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    pub age: i32,
}

impl UserView {
    /// 以指定日期为"今天"构建读模型
    pub fn from_record_on(record: UserRecord, today: NaiveDate) -> Self {
        let dob = DateOfBirth::from_date(record.date_of_birth);
        Self {
            id: record.id,
            name: record.name,
            dob: dob.format(),
            age: dob.age_on(today),
        }
    }
}

impl From<UserRecord> for UserView {
    fn from(record: UserRecord) -> Self {
        Self::from_record_on(record, chrono::Local::now().date_naive())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetUser Handler
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<UserView, ApplicationError> {
        let user = self.user_repo.find_by_id(query.user_id).await?;
        Ok(UserView::from(user))
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: ListUsers) -> Result<Vec<UserView>, ApplicationError> {
        let limit = query.effective_limit();
        let offset = query.offset();

        tracing::debug!(page = query.effective_page(), limit, offset, "Listing users");

        let users = self.user_repo.find_page(limit, offset).await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}
