use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::PortfolioError;
use serde::Serialize;
use tracing::error;

pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// JSON error body; `detail` is always present
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// Error returned by handlers. Storage-level detail is logged, never sent.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Internal(String),
}

impl From<PortfolioError> for ApiError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::NotFound(message) => ApiError::NotFound(message),
            PortfolioError::Validation { field, message } => {
                ApiError::Validation(vec![FieldError { field, message }])
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    detail,
                    errors: Vec::new(),
                },
            ),
            ApiError::Validation(errors) => {
                let detail = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorBody { detail, errors })
            }
            ApiError::Internal(cause) => {
                error!("Request failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        detail: INTERNAL_ERROR_DETAIL.to_string(),
                        errors: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_maps_to_internal() {
        let err: ApiError = PortfolioError::storage("disk on fire").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_422() {
        let err: ApiError = PortfolioError::validation("client_name", "field required").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = PortfolioError::NotFound("Portfolio not found".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
