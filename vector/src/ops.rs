use std::{fmt, str::FromStr};

use ndarray::Array1;

use crate::{
    error::{Result, VectorErr},
    vector::Vector,
};

/// The fixed set of binary vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Dot,
}

impl Operation {
    /// Every registered operation.
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Sub, Operation::Dot];

    /// Returns the name this operation is requested by.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Dot => "dot",
        }
    }

    /// Evaluates this operation over two operands.
    ///
    /// # Arguments
    /// * `a` - The left operand.
    /// * `b` - The right operand.
    ///
    /// # Returns
    /// The resulting vector or a length mismatch error.
    pub fn apply(self, a: &Vector, b: &Vector) -> Result<Vector> {
        match self {
            Operation::Add => add(a, b),
            Operation::Sub => sub(a, b),
            Operation::Dot => dot(a, b),
        }
    }
}

impl FromStr for Operation {
    type Err = VectorErr;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| VectorErr::UnsupportedOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_lengths(a: &Vector, b: &Vector) -> Result<()> {
    if a.len() != b.len() {
        return Err(VectorErr::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(())
}

/// Elementwise sum of two equal-length vectors.
pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
    check_lengths(a, b)?;
    Ok(Vector::new(a.data() + b.data()))
}

/// Elementwise difference `a - b` of two equal-length vectors.
pub fn sub(a: &Vector, b: &Vector) -> Result<Vector> {
    check_lengths(a, b)?;
    Ok(Vector::new(a.data() - b.data()))
}

/// Scalar product of two equal-length vectors, wrapped as a one component vector.
pub fn dot(a: &Vector, b: &Vector) -> Result<Vector> {
    check_lengths(a, b)?;
    let product = a.data().dot(b.data());
    Ok(Vector::new(Array1::from_elem(1, product)))
}

/// Looks up an operation by name and evaluates it.
///
/// The name is resolved before the operands are looked at, so an unknown
/// operation is reported even when the operands are also invalid.
///
/// # Arguments
/// * `op` - The operation's name.
/// * `a` - The left operand.
/// * `b` - The right operand.
///
/// # Returns
/// The resulting vector or the first error found.
pub fn perform(op: &str, a: &Vector, b: &Vector) -> Result<Vector> {
    op.parse::<Operation>()?.apply(a, b)
}
