//! Authentication configuration.

use serde::{Deserialize, Serialize};

use super::app::Environment;
use crate::error::AppError;

/// Signing secret used when none is configured outside production.
pub const DEVELOPMENT_JWT_SECRET: &str = "fams-development-secret-not-for-production";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    ///
    /// Empty means "not configured"; see [`AuthConfig::resolve_secret`].
    #[serde(default)]
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Name of the cookie carrying the session token for browser navigation.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length for newly created users.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_minutes: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min(),
        }
    }
}

impl AuthConfig {
    /// Fill in or reject the signing secret for the given environment.
    ///
    /// Production requires an explicit secret that differs from the
    /// development fallback. Other environments fall back to
    /// [`DEVELOPMENT_JWT_SECRET`] and log a warning.
    pub fn resolve_secret(&mut self, environment: Environment) -> Result<(), AppError> {
        let missing = self.jwt_secret.trim().is_empty();
        let is_fallback = self.jwt_secret == DEVELOPMENT_JWT_SECRET;

        if environment.is_production() {
            if missing {
                return Err(AppError::configuration(
                    "auth.jwt_secret must be set in production (FAMS__AUTH__JWT_SECRET)",
                ));
            }
            if is_fallback {
                return Err(AppError::configuration(
                    "auth.jwt_secret must not use the development fallback in production",
                ));
            }
            return Ok(());
        }

        if missing {
            tracing::warn!(
                environment = %environment,
                "auth.jwt_secret not set; using the development fallback secret"
            );
            self.jwt_secret = DEVELOPMENT_JWT_SECRET.to_string();
        }
        Ok(())
    }
}

fn default_token_ttl() -> u64 {
    8 * 60
}

fn default_cookie_name() -> String {
    "fams_session".to_string()
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_requires_secret() {
        let mut config = AuthConfig::default();
        assert!(config.resolve_secret(Environment::Production).is_err());
    }

    #[test]
    fn test_production_rejects_fallback() {
        let mut config = AuthConfig {
            jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            ..AuthConfig::default()
        };
        assert!(config.resolve_secret(Environment::Production).is_err());
    }

    #[test]
    fn test_production_accepts_explicit_secret() {
        let mut config = AuthConfig {
            jwt_secret: "a-real-secret".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.resolve_secret(Environment::Production).is_ok());
        assert_eq!(config.jwt_secret, "a-real-secret");
    }

    #[test]
    fn test_development_uses_fallback() {
        let mut config = AuthConfig::default();
        config.resolve_secret(Environment::Development).unwrap();
        assert_eq!(config.jwt_secret, DEVELOPMENT_JWT_SECRET);
    }
}
