//! Error types for the service desk

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use honeyrae_types::EntityId;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeskError {
    #[error("Service ticket not found: {0}")]
    TicketNotFound(EntityId),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(EntityId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(EntityId),

    #[error("Ticket id {body} does not match path id {path}")]
    IdMismatch { path: EntityId, body: EntityId },

    /// Request body could not be read as the expected JSON
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// A derived query matched nothing
    #[error("No {0}")]
    NoMatches(&'static str),
}

impl From<JsonRejection> for DeskError {
    fn from(rejection: JsonRejection) -> Self {
        DeskError::BadRequest(rejection.body_text())
    }
}

impl DeskError {
    pub fn status(&self) -> StatusCode {
        match self {
            DeskError::IdMismatch { .. } | DeskError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DeskError::TicketNotFound(_)
            | DeskError::EmployeeNotFound(_)
            | DeskError::CustomerNotFound(_)
            | DeskError::NoMatches(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::warn!("Rejected request: {}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
