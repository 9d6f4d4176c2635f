//! Runtime Values
//!
//! A minimal model of dynamic values, used to check whether a concrete value
//! fits an annotated type and to classify a value into its type.

use core::fmt;
use std::fmt::{Display, Formatter};

/// Key of an array entry. Arrays are ordered maps keyed by integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<(ArrayKey, Value)>),
    /// An instance of the class with the given fully-qualified name.
    Object { class: String },
    /// An opaque handle to an external resource.
    Resource(u64),
    /// An anonymous function.
    Closure,
}

impl Value {
    /// Builds a list: an array keyed `0..n` in iteration order.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(
            items
                .into_iter()
                .zip(0_i64..)
                .map(|(item, idx)| (ArrayKey::Int(idx), item))
                .collect(),
        )
    }

    /// Builds an instance of `class`. A leading namespace separator is dropped.
    pub fn object(class: &str) -> Self {
        Value::Object {
            class: class.trim_start_matches('\\').to_string(),
        }
    }

    /// A short name for the kind of this value, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object { .. } => "object",
            Value::Resource(_) => "resource",
            Value::Closure => "closure",
        }
    }
}

impl From<ArrayKey> for Value {
    fn from(key: ArrayKey) -> Self {
        match key {
            ArrayKey::Int(i) => Value::Int(i),
            ArrayKey::String(s) => Value::String(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl Display for ArrayKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{i}"),
            ArrayKey::String(s) => write!(f, "{s:?}"),
        }
    }
}
