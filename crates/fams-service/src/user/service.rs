//! User management: profile lookup and admin CRUD.
//!
//! A role is assigned at creation and never changed afterwards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use fams_auth::password::{PasswordHasher, PasswordValidator};
use fams_auth::rbac::Permission;
use fams_core::error::AppError;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_database::repositories::UserRepository;
use fams_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Login email (unique).
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Role assignment.
    pub role: UserRole,
    /// Department, if any.
    pub department: Option<String>,
}

/// Handles user profile and administration operations.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Loads the current user's record.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists users, optionally by role.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        role: Option<UserRole>,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        ctx.require(Permission::ManageUsers)?;
        self.user_repo.find_all(role, &page).await
    }

    /// Creates a user (admin).
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateUserRequest,
    ) -> Result<User, AppError> {
        ctx.require(Permission::ManageUsers)?;
        self.create_unchecked(req).await
    }

    /// Creates a user without a caller context. Used by the CLI bootstrap.
    pub async fn create_unchecked(&self, req: CreateUserRequest) -> Result<User, AppError> {
        let email = req.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        self.validator.validate(&req.password)?;

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                name: req.name.trim().to_string(),
                role: req.role,
                department: req.department,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Deletes a user (admin). Admins cannot delete themselves.
    pub async fn delete(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        ctx.require(Permission::ManageUsers)?;

        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }
        if !self.user_repo.delete(user_id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin = %ctx.user_id, user_id = %user_id, "User deleted");
        Ok(())
    }
}
