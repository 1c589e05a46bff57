use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_inquiry::validation::ValidationErrors;
use contracts::shared::api_error::ApiErrorBody;

use crate::domain::a001_product::error::ProductError;
use thiserror::Error;

/// Errors returned by HTTP handlers.
///
/// Every variant renders as `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Missing or invalid admin token")]
    Unauthorized,

    #[error("Admin access is disabled")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        let e = match e.downcast::<ValidationErrors>() {
            Ok(validation) => return ApiError::Validation(validation.to_string()),
            Err(other) => other,
        };
        match e.downcast::<ProductError>() {
            Ok(ProductError::Invalid(msg)) => ApiError::Validation(msg),
            Ok(ProductError::InvalidCsv(msg)) => ApiError::BadRequest(msg),
            Err(other) => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                "Something went wrong. Please try again later.".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiErrorBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_inquiry::aggregate::ContactRequest;
    use contracts::domain::a002_inquiry::validation::validate_contact;

    #[test]
    fn validation_errors_downcast_to_bad_request() {
        let errors = validate_contact(&ContactRequest::default()).unwrap_err();
        let api: ApiError = anyhow::Error::new(errors).into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert!(api.to_string().starts_with("Please enter your name"));
    }

    #[test]
    fn product_input_errors_become_bad_request() {
        let api: ApiError = anyhow::Error::new(ProductError::Invalid("Name cannot be empty".into())).into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), "Name cannot be empty");

        let api: ApiError = anyhow::Error::new(ProductError::InvalidCsv("Line 3: bad row".into())).into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_errors_become_internal() {
        let api: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
