//! Elementwise arithmetic over `f64` vectors.
mod error;
mod ops;
mod vector;

pub use error::{Result, VectorErr};
pub use ops::{Operation, add, dot, perform, sub};
pub use vector::Vector;
