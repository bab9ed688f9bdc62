//! The ordered route policy and its decision function.
//!
//! Evaluation order for a guarded path:
//!
//! 1. Paths under the auth prefix pass, with or without a session.
//! 2. No session → sign in.
//! 3. Rules are checked in order; the first matching rule the role fails
//!    sends the user to the dashboard.
//! 4. Otherwise pass.
//!
//! Paths outside the matcher set are not guarded at all.

use serde::Serialize;

use fams_core::config::RoutesConfig;
use fams_entity::user::UserRole;

use super::rule::{RouteRule, path_has_prefix};
use crate::session::Session;

/// Terminal outcome of the guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardAction {
    /// Let the request through to its handler.
    PassThrough,
    /// No session: send the caller to sign in.
    RedirectToSignIn,
    /// Session present but the role may not enter this area.
    RedirectToDashboard,
}

/// Ordered prefix rules plus the guard's matcher set and redirect targets.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    matchers: Vec<String>,
    rules: Vec<RouteRule>,
    auth_prefix: String,
    sign_in_path: String,
    dashboard_path: String,
}

impl RoutePolicy {
    /// Builds a policy from explicit parts.
    pub fn new(
        matchers: Vec<String>,
        rules: Vec<RouteRule>,
        routes: &RoutesConfig,
    ) -> Self {
        Self {
            matchers,
            rules,
            auth_prefix: routes.auth_prefix.clone(),
            sign_in_path: routes.sign_in_path.clone(),
            dashboard_path: routes.dashboard_path.clone(),
        }
    }

    /// The faculty route table: one area per role, plus the dashboard and API.
    pub fn standard(routes: &RoutesConfig) -> Self {
        let rules = vec![
            RouteRule::new("/admin", &[UserRole::FacultyAdmin]),
            RouteRule::new("/officer", &[UserRole::DepartmentalOfficer]),
            RouteRule::new("/lecturer", &[UserRole::Lecturer]),
            RouteRule::new("/course-rep", &[UserRole::CourseRep]),
        ];

        let mut matchers: Vec<String> = rules.iter().map(|r| r.prefix().to_string()).collect();
        matchers.push(routes.dashboard_path.clone());
        matchers.push("/api".to_string());

        Self::new(matchers, rules, routes)
    }

    /// Whether the guard runs for `path` at all.
    pub fn is_guarded(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| path_has_prefix(path, m))
    }

    /// Whether `path` is an always-reachable authentication endpoint.
    pub fn is_auth_path(&self, path: &str) -> bool {
        path_has_prefix(path, &self.auth_prefix)
    }

    /// Decide what to do with a request. Pure in `(path, session)`.
    pub fn evaluate(&self, path: &str, session: Option<&Session>) -> GuardAction {
        if !self.is_guarded(path) || self.is_auth_path(path) {
            return GuardAction::PassThrough;
        }

        let Some(session) = session else {
            return GuardAction::RedirectToSignIn;
        };

        match self
            .rules
            .iter()
            .find(|rule| rule.matches(path) && !rule.permits(session.role))
        {
            Some(_) => GuardAction::RedirectToDashboard,
            None => GuardAction::PassThrough,
        }
    }

    /// Where a redirecting action points. `None` for pass-through.
    pub fn redirect_target(&self, action: GuardAction) -> Option<&str> {
        match action {
            GuardAction::PassThrough => None,
            GuardAction::RedirectToSignIn => Some(&self.sign_in_path),
            GuardAction::RedirectToDashboard => Some(&self.dashboard_path),
        }
    }

    /// The ordered prefix rules.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Sign-in path.
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Generic dashboard path.
    pub fn dashboard_path(&self) -> &str {
        &self.dashboard_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn policy() -> RoutePolicy {
        RoutePolicy::standard(&RoutesConfig::default())
    }

    fn session(role: UserRole) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            role,
            name: "Test User".to_string(),
            email: "test@faculty.example".to_string(),
        }
    }

    const PROTECTED: [&str; 6] = [
        "/admin",
        "/officer/assets",
        "/lecturer/x",
        "/course-rep",
        "/dashboard",
        "/api/assets",
    ];

    #[test]
    fn test_admin_passes_every_protected_prefix() {
        let policy = policy();
        let admin = session(UserRole::FacultyAdmin);
        for path in PROTECTED {
            assert_eq!(policy.evaluate(path, Some(&admin)), GuardAction::PassThrough, "{path}");
        }
    }

    #[test]
    fn test_no_session_always_signs_in() {
        let policy = policy();
        for path in PROTECTED {
            assert_eq!(policy.evaluate(path, None), GuardAction::RedirectToSignIn, "{path}");
        }
    }

    #[test]
    fn test_lecturer_area() {
        let policy = policy();
        assert_eq!(
            policy.evaluate("/lecturer/x", Some(&session(UserRole::CourseRep))),
            GuardAction::RedirectToDashboard
        );
        assert_eq!(
            policy.evaluate("/lecturer/x", Some(&session(UserRole::Lecturer))),
            GuardAction::PassThrough
        );
        assert_eq!(
            policy.evaluate("/lecturer/x", Some(&session(UserRole::FacultyAdmin))),
            GuardAction::PassThrough
        );
    }

    #[test]
    fn test_role_areas_are_exclusive_apart_from_admin() {
        let policy = policy();
        for role in UserRole::ALL {
            for rule in policy.rules() {
                let expected = if role.is_admin() || rule.allowed_roles().contains(&role) {
                    GuardAction::PassThrough
                } else {
                    GuardAction::RedirectToDashboard
                };
                assert_eq!(policy.evaluate(rule.prefix(), Some(&session(role))), expected);
            }
        }
    }

    #[test]
    fn test_role_home_is_reachable_for_each_role() {
        let policy = policy();
        for role in UserRole::ALL {
            assert_eq!(
                policy.evaluate(role.dashboard_path(), Some(&session(role))),
                GuardAction::PassThrough
            );
        }
    }

    #[test]
    fn test_auth_prefix_bypass() {
        let policy = policy();
        for path in ["/api/auth", "/api/auth/login", "/api/auth/session"] {
            assert_eq!(policy.evaluate(path, None), GuardAction::PassThrough);
            assert_eq!(
                policy.evaluate(path, Some(&session(UserRole::CourseRep))),
                GuardAction::PassThrough
            );
        }
        assert_eq!(policy.evaluate("/api/authors", None), GuardAction::RedirectToSignIn);
    }

    #[test]
    fn test_unlisted_paths_are_open() {
        let policy = policy();
        for path in ["/", "/health", "/auth/signin", "/uploads/a.png", "/administrator"] {
            assert!(!policy.is_guarded(path), "{path}");
            assert_eq!(policy.evaluate(path, None), GuardAction::PassThrough);
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let policy = policy();
        let rep = session(UserRole::CourseRep);
        for path in PROTECTED.iter().chain(["/health", "/api/auth/login"].iter()) {
            for s in [None, Some(&rep)] {
                assert_eq!(policy.evaluate(path, s), policy.evaluate(path, s));
            }
        }
    }

    #[test]
    fn test_redirect_targets() {
        let policy = policy();
        assert_eq!(policy.redirect_target(GuardAction::PassThrough), None);
        assert_eq!(
            policy.redirect_target(GuardAction::RedirectToSignIn),
            Some("/auth/signin")
        );
        assert_eq!(
            policy.redirect_target(GuardAction::RedirectToDashboard),
            Some("/dashboard")
        );
    }
}
