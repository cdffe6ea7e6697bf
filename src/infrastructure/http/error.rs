//! HTTP Error Handling
//!
//! 所有错误 JSON 响应的唯一出口：`{ "error": <message> }`

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::client::ClientError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 面向用户的错误消息
pub mod message {
    pub const MISSING_ID: &str = "missing ID";
    pub const INVALID_ID: &str = "ID provided by request is not valid.";
    pub const CLIENT_NOT_FOUND: &str = "client with provided ID was not found";
    pub const NO_RECORDS_DELETED: &str = "client not found, no records deleted";
    pub const INVALID_BODY: &str = "request body is not valid JSON";
    pub const BODY_TOO_LARGE: &str = "request body is too large";
    pub const NO_SUCH_ENDPOINT: &str = "no such API endpoint";
    pub const METHOD_NOT_ALLOWED: &str = "method not allowed for this endpoint";
    pub const NOT_ACKNOWLEDGED: &str = "failed to add client to database";
    pub const INTERNAL: &str = "internal server error";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// 请求中的 ID 无法转换为存储的标识格式
    InvalidId(String),
    NotFound(String),
    /// 路由存在但不支持该方法
    MethodNotAllowed,
    /// 请求体超过大小限制
    PayloadTooLarge,
    /// 存储未确认写入；状态码沿用 400
    WriteNotAcknowledged(String),
    /// 未分类错误，细节只写日志
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::WriteNotAcknowledged(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                ErrorResponse::new(msg)
            }
            ApiError::InvalidId(raw) => {
                tracing::warn!(status = status.as_u16(), id = %raw, "Invalid client ID");
                ErrorResponse::new(message::INVALID_ID)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                ErrorResponse::new(msg)
            }
            ApiError::MethodNotAllowed => {
                tracing::warn!(status = status.as_u16(), "Method not allowed");
                ErrorResponse::new(message::METHOD_NOT_ALLOWED)
            }
            ApiError::PayloadTooLarge => {
                tracing::warn!(status = status.as_u16(), "Request body too large");
                ErrorResponse::new(message::BODY_TOO_LARGE)
            }
            ApiError::WriteNotAcknowledged(detail) => {
                tracing::error!(status = status.as_u16(), error = %detail, "Write not acknowledged");
                ErrorResponse::new(message::NOT_ACKNOWLEDGED)
            }
            ApiError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), error = %detail, "Internal server error");
                ErrorResponse::new(message::INTERNAL)
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::MissingId => ApiError::BadRequest(message::MISSING_ID.to_string()),
            ClientError::MalformedId(raw) => ApiError::InvalidId(raw),
            ClientError::MissingField(field) => {
                ApiError::BadRequest(ClientError::MissingField(field).to_string())
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => {
                ApiError::NotFound(message::CLIENT_NOT_FOUND.to_string())
            }
            ApplicationError::NothingDeleted { .. } => {
                ApiError::NotFound(message::NO_RECORDS_DELETED.to_string())
            }
            ApplicationError::WriteNotAcknowledged(detail) => {
                ApiError::WriteNotAcknowledged(detail)
            }
            ApplicationError::RepositoryError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        tracing::debug!(error = %e.body_text(), "Rejected request body");
        match e {
            JsonRejection::BytesRejection(ref bytes)
                if bytes.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                ApiError::PayloadTooLarge
            }
            _ => ApiError::BadRequest(message::INVALID_BODY.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::InvalidId(e.body_text())
    }
}
