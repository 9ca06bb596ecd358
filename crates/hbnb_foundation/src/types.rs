//! Type descriptors for schema validation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::PersistentVec;
use crate::value::Value;

/// Type descriptor for schema validation.
///
/// Used to declare entity field types, supply defaults, and coerce
/// user-supplied values at update time.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Homogeneous list type.
    List(Box<Type>),
    /// Any type (accepts any value).
    Any,
}

impl Type {
    /// Creates a list type with the given element type.
    #[must_use]
    pub fn list(element: Type) -> Self {
        Self::List(Box::new(element))
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns the value a field of this type holds when nothing was supplied.
    ///
    /// Strings default to empty, numbers to zero, lists to empty.
    #[must_use]
    pub fn default_value(&self) -> Value {
        match self {
            Self::Nil | Self::Any => Value::Nil,
            Self::Bool => Value::Bool(false),
            Self::Int => Value::Int(0),
            Self::Float => Value::Float(0.0),
            Self::String => Value::from(""),
            Self::List(_) => Value::List(PersistentVec::new()),
        }
    }

    /// Checks if a value type is accepted by this type without conversion.
    ///
    /// - `Any` accepts all types
    /// - Primitive types must match exactly, except that `Float` accepts `Int`
    /// - List types check element types recursively
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        if self.is_any() {
            return true;
        }

        match (self, value_type) {
            (Self::Nil, Self::Nil)
            | (Self::Bool, Self::Bool)
            | (Self::Int | Self::Float, Self::Int)
            | (Self::Float, Self::Float)
            | (Self::String, Self::String) => true,

            // A runtime list reports List(Any) since elements are not inspected
            (Self::List(expected), Self::List(actual)) => {
                actual.is_any() || expected.accepts(actual)
            }

            _ => false,
        }
    }

    /// Converts a value into this type, if it can be done without guessing.
    ///
    /// Text coming from the command line arrives as strings, so numeric and
    /// boolean types parse their string form. Returns `None` when the value
    /// cannot represent this type.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (Self::Any, v) => Some(v),
            (Self::Nil, Value::Nil) => Some(Value::Nil),

            (Self::Bool, Value::Bool(b)) => Some(Value::Bool(b)),
            (Self::Bool, Value::String(s)) => match s.trim() {
                "true" | "True" => Some(Value::Bool(true)),
                "false" | "False" => Some(Value::Bool(false)),
                _ => None,
            },

            (Self::Int, Value::Int(n)) => Some(Value::Int(n)),
            (Self::Int, Value::String(s)) => s.trim().parse().ok().map(Value::Int),

            // JSON has no NaN or infinity, so they would not survive a save
            (Self::Float, Value::Float(n)) => Some(n).filter(|n| n.is_finite()).map(Value::Float),
            (Self::Float, Value::Int(n)) => Some(Value::Float(n as f64)),
            (Self::Float, Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Float),

            (Self::String, Value::String(s)) => Some(Value::String(s)),
            (Self::String, v @ (Value::Int(_) | Value::Float(_) | Value::Bool(_))) => {
                Some(Value::from(v.to_string()))
            }

            (Self::List(element), Value::List(items)) => items
                .into_iter()
                .map(|item| element.coerce(item))
                .collect::<Option<PersistentVec<Value>>>()
                .map(Value::List),

            _ => None,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::List(t) => write!(f, "list<{t:?}>"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
