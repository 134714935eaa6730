use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The uniform response body: `{status, code, message, data}`. The HTTP
/// status always mirrors `code`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            status: true,
            code: StatusCode::OK.as_u16(),
            message: message.to_owned(),
            data: Some(data),
        }
    }

    pub fn created(message: &str, data: T) -> Self {
        Self {
            status: true,
            code: StatusCode::CREATED.as_u16(),
            message: message.to_owned(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success with no payload.
    pub fn message_only(code: StatusCode, message: &str) -> Self {
        Self {
            status: true,
            code: code.as_u16(),
            message: message.to_owned(),
            data: None,
        }
    }

    pub fn failure(code: u16, message: String) -> Self {
        Self {
            status: false,
            code,
            message,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
