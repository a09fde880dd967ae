use std::fmt::Display;

use serde::{Deserialize, Serialize};
use vector::Vector;

use crate::error::{ApiErr, Result};

/// A decoded calculation request. Absent fields and JSON `null` are both `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestPayload {
    pub a: Option<Vector>,
    pub b: Option<Vector>,
    pub op: Option<String>,
}

impl RequestPayload {
    /// Decodes the first JSON value of a request body.
    ///
    /// Bytes after the first value are ignored and a top level `null` decodes
    /// as an empty request.
    ///
    /// # Arguments
    /// * `body` - The raw request body.
    ///
    /// # Returns
    /// The decoded payload or `ApiErr::Decode`.
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();

        match values.next() {
            Some(payload) => Ok(payload?.unwrap_or_default()),
            None => Err(ApiErr::Decode(<serde_json::Error as serde::de::Error>::custom(
                "empty request body",
            ))),
        }
    }
}

/// The response to a calculation request: either a result or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Success { result: Vector },
    Failure { error: String },
}

impl ResponsePayload {
    pub fn success(result: Vector) -> Self {
        Self::Success { result }
    }

    pub fn failure(err: &impl Display) -> Self {
        Self::Failure {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_request() {
        let body = br#"{"a": [1, 2], "b": [3, 4], "op": "add"}"#;
        let payload = RequestPayload::decode(body).unwrap();

        assert_eq!(payload.a, Some(Vector::from(vec![1.0, 2.0])));
        assert_eq!(payload.b, Some(Vector::from(vec![3.0, 4.0])));
        assert_eq!(payload.op.as_deref(), Some("add"));
    }

    #[test]
    fn missing_and_null_fields_are_absent() {
        let payload = RequestPayload::decode(br#"{"a": null, "extra": true}"#).unwrap();
        assert_eq!(payload, RequestPayload::default());
    }

    #[test]
    fn top_level_null_is_an_empty_request() {
        assert_eq!(
            RequestPayload::decode(b"null").unwrap(),
            RequestPayload::default()
        );
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let payload = RequestPayload::decode(br#"{"op": "dot"} trailing"#).unwrap();
        assert_eq!(payload.op.as_deref(), Some("dot"));
    }

    #[test]
    fn malformed_bodies_fail_to_decode() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"   ",
            b"{",
            b"not json",
            br#"{"a": "x"}"#,
            br#"{"a": [1, "2"]}"#,
            br#"{"op": 5}"#,
            b"[1, 2]",
        ];

        for body in bodies {
            let err = RequestPayload::decode(body).unwrap_err();
            assert!(matches!(err, ApiErr::Decode(_)), "{body:?} decoded");
        }
    }

    #[test]
    fn success_serializes_result_only() {
        let payload = ResponsePayload::success(Vector::from(vec![1.5]));
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"result":[1.5]}"#);
    }

    #[test]
    fn failure_serializes_error_only() {
        let payload = ResponsePayload::failure(&ApiErr::MissingParam("op"));
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"error":"'op' parameter is required"}"#
        );
    }
}
