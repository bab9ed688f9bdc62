//! Login: verify credentials, issue a session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use fams_auth::jwt::JwtEncoder;
use fams_auth::password::PasswordHasher;
use fams_core::error::AppError;
use fams_database::repositories::UserRepository;
use fams_entity::user::User;

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Signed session token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: User,
}

/// Authenticates users against stored Argon2 hashes.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Verifies an email/password pair and issues a session token.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let invalid = || AppError::authentication("Invalid email or password");

        let Some(user) = self.user_repo.find_by_email(email).await? else {
            warn!(email = %email, "Login attempt for unknown email");
            return Err(invalid());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid());
        }

        let issued = self
            .encoder
            .issue(user.id, user.role, &user.name, &user.email)?;
        self.user_repo.touch_last_login(user.id).await?;

        info!(user_id = %user.id, role = %user.role, "User signed in");

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }
}
