//! Resolution of a bearer/cookie token into a [`Session`].

use async_trait::async_trait;

use super::Session;
use crate::jwt::JwtDecoder;

/// Produces the session for a presented token, or `None`.
///
/// Failures (bad signature, expiry, unknown user) are all "no session";
/// callers decide whether that means a redirect or a 401.
#[async_trait]
pub trait SessionResolver: Send + Sync + 'static {
    /// Resolve a raw token.
    async fn resolve(&self, token: &str) -> Option<Session>;
}

/// Resolves sessions from signed JWTs without touching the database.
#[derive(Debug, Clone)]
pub struct JwtSessionResolver {
    decoder: JwtDecoder,
}

impl JwtSessionResolver {
    /// Creates a resolver over the given decoder.
    pub fn new(decoder: JwtDecoder) -> Self {
        Self { decoder }
    }
}

#[async_trait]
impl SessionResolver for JwtSessionResolver {
    async fn resolve(&self, token: &str) -> Option<Session> {
        match self.decoder.decode(token) {
            Ok(claims) => Some(Session::from(claims)),
            Err(e) => {
                tracing::debug!(error = %e.message, "Session token rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use fams_core::config::AuthConfig;
    use fams_entity::user::UserRole;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "resolver-test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[tokio::test]
    async fn test_resolves_valid_token() {
        let config = config();
        let user_id = Uuid::new_v4();
        let issued = JwtEncoder::new(&config)
            .issue(user_id, UserRole::DepartmentalOfficer, "Dee", "dee@faculty.example")
            .unwrap();

        let resolver = JwtSessionResolver::new(JwtDecoder::new(&config));
        let session = resolver.resolve(&issued.token).await.unwrap();
        assert_eq!(session.user_id, user_id);
        assert_eq!(session.role, UserRole::DepartmentalOfficer);
        assert_eq!(session.name, "Dee");
    }

    #[tokio::test]
    async fn test_invalid_token_is_no_session() {
        let resolver = JwtSessionResolver::new(JwtDecoder::new(&config()));
        assert!(resolver.resolve("garbage").await.is_none());
        assert!(resolver.resolve("").await.is_none());
    }
}
