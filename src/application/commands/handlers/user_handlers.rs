//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::application::queries::handlers::UserView;
use crate::domain::DateOfBirth;

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<UserView, ApplicationError> {
        // dob 非法时直接返回，不访问存储
        let dob = DateOfBirth::parse(&command.dob)?;

        let user = self.user_repo.create(&command.name, dob.date()).await?;

        tracing::info!(user_id = user.id, "User created");

        Ok(UserView::from(user))
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<UserView, ApplicationError> {
        let dob = DateOfBirth::parse(&command.dob)?;

        let user = self
            .user_repo
            .update(command.user_id, &command.name, dob.date())
            .await?;

        tracing::info!(user_id = user.id, "User updated");

        Ok(UserView::from(user))
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
///
/// 不做存在性检查：删除不存在的 id 同样返回成功。
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<(), ApplicationError> {
        self.user_repo.delete(command.user_id).await?;

        tracing::info!(user_id = command.user_id, "User deleted");

        Ok(())
    }
}
