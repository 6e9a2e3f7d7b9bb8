use std::cmp::Ordering;
use std::fmt;

use super::expr::CompareOp;

/// Supported fact value types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// An ordered list of values, used with `In` and `Contains`.
    List(Vec<Value>),
}

/// Why a comparison between two values could not be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareFailure {
    /// The operand types differ and no coercion applies.
    TypeMismatch,
    /// The operator has no meaning for these operand types.
    Unsupported,
}

impl Value {
    /// Short lowercase name of the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Compare this value (the fact) to `other` (the rule operand).
    ///
    /// When `upcast` is true an `Int` is widened to `f64` before being compared
    /// with a `Float`. Without it, mixed numeric comparisons are a type mismatch.
    pub(crate) fn compare(
        &self,
        op: CompareOp,
        other: &Value,
        upcast: bool,
    ) -> Result<bool, CompareFailure> {
        match op {
            CompareOp::In => match other {
                Value::List(items) => self.any_equal(items, upcast),
                _ => Err(CompareFailure::Unsupported),
            },
            CompareOp::Contains => match self {
                Value::List(items) => other.any_equal(items, upcast),
                Value::String(haystack) => match other {
                    Value::String(needle) => Ok(haystack.contains(needle.as_str())),
                    _ => Err(CompareFailure::TypeMismatch),
                },
                _ => Err(CompareFailure::Unsupported),
            },
            CompareOp::Eq | CompareOp::Neq => {
                let equal = self.equals(other, upcast)?;
                Ok(if op == CompareOp::Eq { equal } else { !equal })
            }
            CompareOp::Gt | CompareOp::Gte | CompareOp::Lt | CompareOp::Lte => {
                // NaN has no ordering; every ordered comparison against it is false.
                let Some(ord) = self.partial_cmp_value(other, upcast)? else {
                    return Ok(false);
                };
                Ok(match op {
                    CompareOp::Gt => ord == Ordering::Greater,
                    CompareOp::Gte => ord != Ordering::Less,
                    CompareOp::Lt => ord == Ordering::Less,
                    _ => ord != Ordering::Greater,
                })
            }
        }
    }

    fn any_equal(&self, items: &[Value], upcast: bool) -> Result<bool, CompareFailure> {
        for item in items {
            match self.equals(item, upcast) {
                Ok(true) => return Ok(true),
                Ok(false) | Err(CompareFailure::TypeMismatch) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(false)
    }

    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    fn equals(&self, other: &Value, upcast: bool) -> Result<bool, CompareFailure> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a == b),
            (Value::Float(a), Value::Float(b)) => Ok(a == b),
            (Value::Int(a), Value::Float(b)) if upcast => Ok(*a as f64 == *b),
            (Value::Float(a), Value::Int(b)) if upcast => Ok(*a == *b as f64),
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::String(a), Value::String(b)) => Ok(a == b),
            (Value::List(a), Value::List(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b) {
                    if !x.equals(y, upcast)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Err(CompareFailure::TypeMismatch),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp_value(
        &self,
        other: &Value,
        upcast: bool,
    ) -> Result<Option<Ordering>, CompareFailure> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
            (Value::Float(a), Value::Float(b)) => Ok(a.partial_cmp(b)),
            (Value::Int(a), Value::Float(b)) if upcast => Ok((*a as f64).partial_cmp(b)),
            (Value::Float(a), Value::Int(b)) if upcast => Ok(a.partial_cmp(&(*b as f64))),
            (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
            (Value::Bool(_), Value::Bool(_)) | (Value::List(_), Value::List(_)) => {
                Err(CompareFailure::Unsupported)
            }
            _ => Err(CompareFailure::TypeMismatch),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
