// HTTP error mapping
// Every failure a request can hit, rendered as a status code and a `{"message": ...}` body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry_service::ServiceError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

pub type RpcResult<T> = Result<T, RpcError>;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid id format: {0:?}")]
    InvalidId(String),

    #[error("failed to bind body: {0}")]
    InvalidBody(String),

    #[error("user with id {0} not found")]
    NotFound(u64),

    #[error("route not found")]
    RouteNotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl RpcError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RpcError::InvalidId(_) | RpcError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RpcError::NotFound(_) | RpcError::RouteNotFound => StatusCode::NOT_FOUND,
            RpcError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Details stay in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            RpcError::InvalidId(_) => "invalid id format",
            RpcError::InvalidBody(_) => "failed to bind body",
            RpcError::NotFound(_) => "user not found",
            RpcError::RouteNotFound => "route not found",
            RpcError::Internal(_) => "internal server error",
        }
    }
}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => RpcError::NotFound(id),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(json!({ "message": self.client_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RpcError::InvalidId("abc".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RpcError::InvalidBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RpcError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RpcError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_service_error() {
        let err: RpcError = ServiceError::NotFound(5).into();
        assert!(matches!(err, RpcError::NotFound(5)));
        assert_eq!(err.client_message(), "user not found");
    }
}
