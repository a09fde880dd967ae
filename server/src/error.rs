use std::{error::Error, fmt};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::debug;
use vector::VectorErr;

use crate::payload::ResponsePayload;

/// The server module's result type.
pub type Result<T> = std::result::Result<T, ApiErr>;

/// Request level failures. Every variant is the client's fault and is reported
/// as a `400 Bad Request` carrying the error message.
#[derive(Debug)]
pub enum ApiErr {
    /// The request body is not a JSON object of the expected shape.
    Decode(serde_json::Error),

    /// A required field is absent or empty.
    MissingParam(&'static str),

    /// The operation could not be dispatched or evaluated.
    Vector(VectorErr),
}

impl fmt::Display for ApiErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErr::Decode(_) => f.write_str("failed to decode request JSON"),
            ApiErr::MissingParam(name) => write!(f, "'{name}' parameter is required"),
            ApiErr::Vector(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ApiErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiErr::Decode(e) => Some(e),
            ApiErr::Vector(e) => Some(e),
            ApiErr::MissingParam(_) => None,
        }
    }
}

impl From<VectorErr> for ApiErr {
    fn from(value: VectorErr) -> Self {
        Self::Vector(value)
    }
}

impl From<serde_json::Error> for ApiErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        debug!("rejecting request: {self:?}");
        let body = ResponsePayload::failure(&self);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
