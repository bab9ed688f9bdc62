//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use fams_core::config::AuthConfig;
use fams_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token (signature and expiry).
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Session has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid session signature")
                    }
                    _ => AppError::authentication(format!("Invalid session token: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use fams_core::error::ErrorKind;
    use fams_entity::user::UserRole;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_issue_then_decode() {
        let config = config("unit-test-secret");
        let user_id = Uuid::new_v4();
        let issued = JwtEncoder::new(&config)
            .issue(user_id, UserRole::Lecturer, "Ada", "ada@faculty.example")
            .unwrap();

        let claims = JwtDecoder::new(&config).decode(&issued.token).unwrap();
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.role, UserRole::Lecturer);
        assert_eq!(claims.email, "ada@faculty.example");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issued = JwtEncoder::new(&config("secret-a"))
            .issue(Uuid::new_v4(), UserRole::CourseRep, "Bo", "bo@faculty.example")
            .unwrap();

        let err = JwtDecoder::new(&config("secret-b"))
            .decode(&issued.token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = config("unit-test-secret");
        let old = Claims {
            sub: Uuid::new_v4(),
            role: UserRole::Lecturer,
            name: "Cy".to_string(),
            email: "cy@faculty.example".to_string(),
            iat: 1_000,
            exp: 2_000,
            jti: Uuid::new_v4(),
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &old,
            &jsonwebtoken::EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        let err = JwtDecoder::new(&config).decode(&token).unwrap_err();
        assert_eq!(err.message, "Session has expired");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let decoder = JwtDecoder::new(&config("unit-test-secret"));
        assert!(decoder.decode("not-a-jwt").is_err());
    }
}
