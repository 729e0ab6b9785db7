//! Request body validation.
//!
//! [`ValidatedBody<T>`] is a drop-in replacement for `Json<T>` that decodes a
//! request body from either JSON or URL-encoded form data, then runs the
//! payload's [`validator::Validate`] rules. Handlers behind it never see a
//! malformed body, and a rejected request performs no store access.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Control characters, including DEL. Tabs and newlines count: every field
/// this server accepts is a single line of printable text.
static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F]").unwrap());

/// Shared rule for single-line text fields: non-empty after trimming and free
/// of control characters. Length bounds are declared per field.
pub fn text_line(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    if CONTROL_CHARS.is_match(value) {
        let mut err = ValidationError::new("control_chars");
        err.message = Some("must not contain control characters".into());
        return Err(err);
    }
    Ok(())
}

/// A field-level validation error
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub errors: Vec<FieldError>,
    pub code: u16,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let message = if errors.len() == 1 {
            format!("Validation failed for field '{}'", errors[0].field)
        } else {
            format!("Validation failed for {} fields", errors.len())
        };

        Self {
            error: "ValidationError".to_string(),
            message,
            errors,
            code: 400,
        }
    }
}

/// Rejection produced by [`ValidatedBody`]; terminates the request with 400
#[derive(Debug)]
pub struct ValidationRejection {
    pub errors: Vec<FieldError>,
}

impl ValidationRejection {
    fn body(message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: "body".to_string(),
                message: message.into(),
            }],
        }
    }

    fn from_validation_errors(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        // HashMap iteration order is arbitrary; keep the body deterministic
        fields.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
        Self { errors: fields }
    }
}

impl axum::response::IntoResponse for ValidationRejection {
    fn into_response(self) -> axum::response::Response {
        let response = ValidationErrorResponse::new(self.errors);
        (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
}

/// Body extractor that decodes JSON or URL-encoded payloads and validates
/// them before the handler runs.
pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let data: T = if content_type.starts_with("application/json") {
            let Json(data) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ValidationRejection::body(rejection.body_text()))?;
            data
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(data) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ValidationRejection::body(rejection.body_text()))?;
            data
        } else {
            return Err(ValidationRejection::body(
                "Content-Type must be application/json or application/x-www-form-urlencoded",
            ));
        };

        data.validate()
            .map_err(ValidationRejection::from_validation_errors)?;

        Ok(ValidatedBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_line_accepts_printable() {
        assert!(text_line("The Silmarillion").is_ok());
        assert!(text_line("O'Brien").is_ok());
        assert!(text_line("Sci-Fi").is_ok());
    }

    #[test]
    fn test_text_line_rejects_blank() {
        assert!(text_line("").is_err());
        assert!(text_line("   ").is_err());
        assert!(text_line("\t \t").is_err());
    }

    #[test]
    fn test_text_line_rejects_control_chars() {
        assert!(text_line("a\x00b").is_err());
        assert!(text_line("line\nbreak").is_err());
        assert!(text_line("bell\x07").is_err());
    }

    #[test]
    fn test_response_message_counts_fields() {
        let single = ValidationErrorResponse::new(vec![FieldError {
            field: "bookTitle".to_string(),
            message: "must not be blank".to_string(),
        }]);
        assert!(single.message.contains("field 'bookTitle'"));
        assert_eq!(single.code, 400);

        let double = ValidationErrorResponse::new(vec![
            FieldError {
                field: "familyName".to_string(),
                message: "must not be blank".to_string(),
            },
            FieldError {
                field: "genreName".to_string(),
                message: "must not be blank".to_string(),
            },
        ]);
        assert!(double.message.contains("2 fields"));
    }
}
