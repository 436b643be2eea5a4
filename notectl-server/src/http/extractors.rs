//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{NoteInput, ValidationError, ValidationErrors};

/// Extract a note id from the path.
///
/// Anything that is not a 32-bit integer cannot name a stored note, so it
/// is rejected as not found rather than reaching the database.
pub struct NoteId(pub i32);

impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let id = raw.trim().parse::<i32>().map_err(|_| {
            tracing::debug!(id = %raw, "non-numeric note id");
            ApiError::NotFound
        })?;

        Ok(Self(id))
    }
}

/// Extract untrusted note input from a JSON body.
///
/// The body is parsed as JSON whatever its `Content-Type`. An empty body
/// is read as `null`, so every field is reported missing. Field-level
/// problems are left for validation; only bytes that are not JSON at all
/// are rejected here.
pub struct NoteBody(pub NoteInput);

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let malformed =
            || ApiError::Validation(ValidationErrors::single(ValidationError::MalformedBody));

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "unreadable note body");
            malformed()
        })?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice::<Value>(&bytes).map_err(|e| {
                tracing::debug!(error = %e, "note body is not JSON");
                malformed()
            })?
        };

        Ok(Self(NoteInput::from_json(&body)))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};

    use super::*;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<NoteInput, ApiError> {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        NoteBody::from_request(req, &()).await.map(|NoteBody(input)| input)
    }

    const VALID: &str = r#"{"title":"t","text":"x","datetime":"2024-01-01"}"#;

    #[tokio::test]
    async fn content_type_is_not_required() {
        for content_type in [None, Some("text/plain"), Some("application/json")] {
            let input = extract(content_type, VALID).await.unwrap();
            assert!(input.into_fields().is_ok(), "{content_type:?}");
        }
    }

    #[tokio::test]
    async fn empty_body_is_all_fields_missing() {
        let errors = extract(None, "  ").await.unwrap().into_fields().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[tokio::test]
    async fn non_json_is_malformed() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(errors) if errors.contains(ValidationError::MalformedBody)
        ));
    }
}
