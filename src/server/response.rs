//! JSON envelopes shared by every endpoint.
//!
//! Success: `{"success": true, "data": [...], "count": n}` with `n == data.len()`.
//! Failure: `{"success": false, "error": "...", "address"?: "..."}`.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::{QueryError, QueryResult};

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    success: bool,
    data: Vec<T>,
    count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self { Self { success: true, count: data.len(), data } }
    pub fn data(&self) -> &[T] { &self.data }
    pub fn count(&self) -> usize { self.count }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response { Json(self).into_response() }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self { Self { success: false, error: error.into(), address: None } }
    pub fn with_address(mut self, address: impl Into<String>) -> Self { self.address = Some(address.into()); self }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid Ethereum address: {0}")]
    InvalidAddress(String),
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidAddress(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::WalletNotFound(_) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Internal details never leave the process.
    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidAddress(address) => ErrorResponse::new("Invalid Ethereum address").with_address(address),
            ApiError::WalletNotFound(address) => ErrorResponse::new("Wallet not found").with_address(address),
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => ErrorResponse::new(msg.as_str()),
            ApiError::MethodNotAllowed => ErrorResponse::new("Method not allowed"),
            ApiError::Internal(_) => ErrorResponse::new("Internal server error"),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidAddress { address } => ApiError::InvalidAddress(address),
            QueryError::WalletNotFound { address } => ApiError::WalletNotFound(address),
            QueryError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "request failed"),
            other => tracing::debug!(status = %other.status(), error = ?other, "request rejected"),
        }
        (self.status(), Json(self.body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A query result rendered as a JSON body outside of HTTP (CLI output).
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"success": true, ...}`
    Success(Value),
    /// Client failure body, `{"success": false, ...}`
    Rejected(Value),
}

impl Envelope {
    /// Unexpected failures stay errors; only client failures become a
    /// `Rejected` body.
    pub fn from_result<T: Serialize>(result: QueryResult<Vec<T>>) -> ApiResult<Self> {
        let to_value = |body: serde_json::Result<Value>| body.map_err(|e| ApiError::Internal(format!("JSON error: {}", e)));
        match result.map_err(ApiError::from) {
            Ok(items) => Ok(Envelope::Success(to_value(serde_json::to_value(ListResponse::new(items)))?)),
            Err(err @ ApiError::Internal(_)) => Err(err),
            Err(err) => Ok(Envelope::Rejected(to_value(serde_json::to_value(err.body()))?)),
        }
    }
}
