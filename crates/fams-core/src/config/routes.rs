//! Route guard paths.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Top-level areas the route guard always protects.
const GUARDED_AREAS: [&str; 5] = ["/admin", "/officer", "/lecturer", "/course-rep", "/api"];

/// Paths the route guard redirects to or exempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Where unauthenticated browser requests are sent.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Where role-mismatched browser requests are sent.
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
    /// Prefix of the authentication endpoints, always reachable.
    #[serde(default = "default_auth_prefix")]
    pub auth_prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            dashboard_path: default_dashboard_path(),
            auth_prefix: default_auth_prefix(),
        }
    }
}

impl RoutesConfig {
    /// Reject paths the router cannot mount or the guard would loop on.
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, path) in [
            ("routes.sign_in_path", &self.sign_in_path),
            ("routes.dashboard_path", &self.dashboard_path),
            ("routes.auth_prefix", &self.auth_prefix),
        ] {
            if !path.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "{key} must be an absolute path"
                )));
            }
        }

        if self.sign_in_path == self.dashboard_path {
            return Err(AppError::configuration(
                "routes.sign_in_path and routes.dashboard_path must differ",
            ));
        }

        // An unauthenticated visitor redirected to a guarded sign-in page
        // would be redirected again.
        let guarded = GUARDED_AREAS
            .iter()
            .copied()
            .chain(std::iter::once(self.dashboard_path.as_str()))
            .any(|area| under(&self.sign_in_path, area));
        if guarded && !under(&self.sign_in_path, &self.auth_prefix) {
            return Err(AppError::configuration(format!(
                "routes.sign_in_path '{}' falls under a guarded area",
                self.sign_in_path
            )));
        }
        Ok(())
    }
}

/// Segment-aware prefix test: `/admin` covers `/admin/x` but not `/administer`.
fn under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn default_sign_in_path() -> String {
    "/auth/signin".to_string()
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

fn default_auth_prefix() -> String {
    "/api/auth".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RoutesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_relative_paths_rejected() {
        let routes = RoutesConfig {
            sign_in_path: "login".to_string(),
            ..RoutesConfig::default()
        };
        assert!(routes.validate().is_err());

        let routes = RoutesConfig {
            dashboard_path: "home".to_string(),
            ..RoutesConfig::default()
        };
        assert!(routes.validate().is_err());
    }

    #[test]
    fn test_sign_in_under_guarded_area_rejected() {
        for path in ["/admin/login", "/api/login", "/dashboard/login"] {
            let routes = RoutesConfig {
                sign_in_path: path.to_string(),
                ..RoutesConfig::default()
            };
            assert!(routes.validate().is_err(), "{path} should be rejected");
        }
    }

    #[test]
    fn test_custom_paths_accepted() {
        let routes = RoutesConfig {
            sign_in_path: "/login".to_string(),
            dashboard_path: "/home".to_string(),
            ..RoutesConfig::default()
        };
        assert!(routes.validate().is_ok());

        // Sign-in may sit under the auth prefix even though /api is guarded.
        let routes = RoutesConfig {
            sign_in_path: "/api/auth/signin".to_string(),
            ..RoutesConfig::default()
        };
        assert!(routes.validate().is_ok());

        // Segment boundaries matter.
        let routes = RoutesConfig {
            sign_in_path: "/administer".to_string(),
            ..RoutesConfig::default()
        };
        assert!(routes.validate().is_ok());
    }
}
