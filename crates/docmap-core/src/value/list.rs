use crate::{Error, Result, Value};

impl Value {
    /// Converts a list value to a vector of `T`.
    ///
    /// A scalar converts to a single-element vector and null to an empty one.
    pub fn to_vec<T>(self) -> Result<Vec<T>>
    where
        T: TryFrom<Value, Error = Error>,
    {
        match self {
            Value::Null => Ok(vec![]),
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            value => Ok(vec![T::try_from(value)?]),
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value.into_iter().map(Value::String).collect())
    }
}

impl From<&[String]> for Value {
    fn from(value: &[String]) -> Self {
        Value::List(value.iter().map(Value::from).collect())
    }
}

impl From<Vec<i32>> for Value {
    fn from(value: Vec<i32>) -> Self {
        Value::List(value.into_iter().map(Value::I32).collect())
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Value::List(value.into_iter().map(Value::F64).collect())
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for Value
where
    T: PartialEq<Value>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        match self {
            Value::List(items) => {
                items.len() == N && items.iter().zip(other).all(|(item, other)| other.eq(item))
            }
            _ => false,
        }
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other.as_str() == Some(*self)
    }
}
