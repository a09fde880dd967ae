use axum::{Json, body::Bytes, http::StatusCode};
use log::debug;

use crate::{
    error::Result,
    payload::{RequestPayload, ResponsePayload},
    validate::{Calculation, validate},
};

/// Decodes, validates and evaluates a calculation request.
///
/// Any failure along the way is turned into a `400 Bad Request` by `ApiErr`.
pub async fn calculate(body: Bytes) -> Result<Json<ResponsePayload>> {
    let payload = RequestPayload::decode(&body)?;
    let Calculation { op, a, b } = validate(payload)?;

    let result = vector::perform(&op, &a, &b)?;
    debug!(op = op.as_str(), len = a.len(); "calculated");

    Ok(Json(ResponsePayload::success(result)))
}

/// Liveness probe, always answers `200 OK` with an empty body.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
