//! JSON body extractor that also runs `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, OptionalFromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use validator::Validate;

use fams_core::error::AppError;

use crate::error::ApiError;

/// A deserialized and validated JSON body.
///
/// Malformed JSON and rule violations both become `400` with a JSON error.
/// As `Option<ValidatedJson<T>>` a request without a body yields `None`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::from(AppError::validation(e.body_text())))?;

        value.validate().map_err(|e| {
            let details = serde_json::to_value(&e).unwrap_or(serde_json::Value::Null);
            ApiError::from(AppError::validation("Request validation failed")).with_details(details)
        })?;

        Ok(ValidatedJson(value))
    }
}

impl<T, S> OptionalFromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            return Ok(None);
        }
        <Self as FromRequest<S>>::from_request(req, state)
            .await
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Note {
        #[validate(length(min = 1))]
        text: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(req: Request) -> Result<ValidatedJson<Note>, ApiError> {
        <ValidatedJson<Note> as FromRequest<()>>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ValidatedJson(note) = extract(json_request(r#"{"text":"hi"}"#)).await.unwrap();
        assert_eq!(note.text, "hi");
    }

    #[tokio::test]
    async fn test_rule_violation_is_400() {
        let err = extract(json_request(r#"{"text":""}"#)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let err = extract(json_request("{")).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_optional_without_body_is_none() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let extracted = <ValidatedJson<Note> as OptionalFromRequest<()>>::from_request(req, &())
            .await
            .unwrap();
        assert!(extracted.is_none());
    }
}
