use vector::Vector;

use crate::{
    error::{ApiErr, Result},
    payload::RequestPayload,
};

/// A request whose operation name and operands are all present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub op: String,
    pub a: Vector,
    pub b: Vector,
}

/// Checks that a request carries everything a calculation needs.
///
/// Fields are checked in the order `op`, `a`, `b` and the first missing one is
/// reported.
///
/// # Arguments
/// * `payload` - The decoded request.
///
/// # Returns
/// The validated calculation or `ApiErr::MissingParam`.
pub fn validate(payload: RequestPayload) -> Result<Calculation> {
    let RequestPayload { a, b, op } = payload;

    let op = op
        .filter(|op| !op.is_empty())
        .ok_or(ApiErr::MissingParam("op"))?;
    let a = required("a", a)?;
    let b = required("b", b)?;

    Ok(Calculation { op, a, b })
}

fn required(name: &'static str, operand: Option<Vector>) -> Result<Vector> {
    operand
        .filter(|v| !v.is_empty())
        .ok_or(ApiErr::MissingParam(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(a: Option<Vec<f64>>, b: Option<Vec<f64>>, op: Option<&str>) -> RequestPayload {
        RequestPayload {
            a: a.map(Vector::from),
            b: b.map(Vector::from),
            op: op.map(str::to_string),
        }
    }

    fn missing(result: Result<Calculation>) -> &'static str {
        match result {
            Err(ApiErr::MissingParam(name)) => name,
            other => panic!("expected a missing parameter, got {other:?}"),
        }
    }

    #[test]
    fn complete_request_is_valid() {
        let calc = validate(payload(Some(vec![1.0]), Some(vec![2.0]), Some("add"))).unwrap();

        assert_eq!(calc.op, "add");
        assert_eq!(calc.a.to_vec(), vec![1.0]);
        assert_eq!(calc.b.to_vec(), vec![2.0]);
    }

    #[test]
    fn absent_or_empty_op_is_missing() {
        assert_eq!(missing(validate(payload(Some(vec![1.0]), Some(vec![2.0]), None))), "op");
        assert_eq!(missing(validate(payload(Some(vec![1.0]), Some(vec![2.0]), Some("")))), "op");
    }

    #[test]
    fn absent_or_empty_operands_are_missing() {
        assert_eq!(missing(validate(payload(None, Some(vec![2.0]), Some("add")))), "a");
        assert_eq!(missing(validate(payload(Some(vec![]), Some(vec![2.0]), Some("add")))), "a");
        assert_eq!(missing(validate(payload(Some(vec![1.0]), None, Some("add")))), "b");
        assert_eq!(missing(validate(payload(Some(vec![1.0]), Some(vec![]), Some("add")))), "b");
    }

    #[test]
    fn op_is_checked_first() {
        assert_eq!(missing(validate(RequestPayload::default())), "op");
        assert_eq!(missing(validate(payload(None, None, Some("dot")))), "a");
    }

    #[test]
    fn unknown_op_passes_validation() {
        // dispatch decides what's supported
        let calc = validate(payload(Some(vec![1.0]), Some(vec![1.0, 2.0]), Some("mul"))).unwrap();
        assert_eq!(calc.op, "mul");
    }
}
