use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    title: &'static str,
    message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message }
    }

    pub fn status(&self) -> StatusCode { self.status }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidId(_) => Self::new(StatusCode::BAD_REQUEST, "Invalid Id", Some(e.to_string())),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::Timeout(_) => {
                error!(err = %e, "store timeout");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", Some(e.to_string()))
            }
            ServiceError::Db(_) | ServiceError::Model(_) => {
                error!(err = %e, "store error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("contact"), StatusCode::NOT_FOUND),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Timeout("contact.find_all".into()), StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status(), status);
        }
    }
}
