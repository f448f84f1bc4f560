use serde::{Deserialize, Serialize};

/// A per-instance mark encoding: either one value broadcast to every
/// instance or an explicit array with one entry per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrArray<T: Clone> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T: Clone> ScalarOrArray<T> {
    pub fn new_scalar(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }

    pub fn new_array(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }

    pub fn as_iter(&self, scalar_len: usize) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            ScalarOrArray::Scalar(value) => Box::new(std::iter::repeat(value).take(scalar_len)),
            ScalarOrArray::Array(values) => Box::new(values.iter()),
        }
    }

    pub fn as_iter_owned(&self, scalar_len: usize) -> Box<dyn Iterator<Item = T> + '_> {
        match self {
            ScalarOrArray::Scalar(value) => {
                Box::new(std::iter::repeat(value.clone()).take(scalar_len))
            }
            ScalarOrArray::Array(values) => Box::new(values.iter().cloned()),
        }
    }

    pub fn as_vec(&self, scalar_len: usize) -> Vec<T> {
        self.as_iter(scalar_len).cloned().collect()
    }

    pub fn map<U: Clone>(&self, f: impl Fn(&T) -> U) -> ScalarOrArray<U> {
        match self {
            ScalarOrArray::Scalar(value) => ScalarOrArray::Scalar(f(value)),
            ScalarOrArray::Array(values) => ScalarOrArray::Array(values.iter().map(f).collect()),
        }
    }
}
