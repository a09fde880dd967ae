use ndarray::Array1;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable, ordered sequence of `f64` components.
///
/// On the wire a `Vector` is a plain JSON array of numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector(Array1<f64>);

impl Vector {
    /// Creates a new vector from its components.
    ///
    /// # Arguments
    /// * `data` - The vector's components.
    ///
    /// # Returns
    /// A new `Vector` instance.
    pub fn new(data: Array1<f64>) -> Self {
        Self(data)
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying array.
    pub fn data(&self) -> &Array1<f64> {
        &self.0
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Copies the components into a `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Self(Array1::from_vec(value))
    }
}

impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<f64>::deserialize(deserializer).map(Vector::from)
    }
}
