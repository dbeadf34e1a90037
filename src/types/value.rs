//! Constant values carried by literal nodes.
//!
//! Inference never evaluates expressions; values only feed the rules that
//! depend on a constant argument (pad lengths, rounding scale, format strings).

use std::fmt;

use crate::types::charset::Charset;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Decimal(String),
    Double(f64),
    String { text: String, charset: Charset },
    Bytes(Vec<u8>),
    Date(String),
    Time(String),
    Timestamp(String),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            Value::Decimal(s) => s.split('.').next().and_then(|i| i.parse().ok()),
            Value::Double(v) => Some(v.round() as i64),
            Value::String { text, .. } => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String { text, .. } => Some(text),
            Value::Date(s) | Value::Time(s) | Value::Timestamp(s) => Some(s),
            _ => None,
        }
    }

    pub fn negate(&self) -> Option<Value> {
        match self {
            Value::Int(v) => Some(v.checked_neg().map_or_else(
                || Value::Decimal(format!("{}", -(i128::from(*v)))),
                Value::Int,
            )),
            Value::UInt(v) => Some(
                i64::try_from(*v)
                    .map(|v| Value::Int(-v))
                    .unwrap_or_else(|_| Value::Decimal(format!("-{v}"))),
            ),
            Value::Bool(b) => Some(Value::Int(-i64::from(*b))),
            Value::Decimal(s) => Some(Value::Decimal(match s.strip_prefix('-') {
                Some(rest) => rest.to_string(),
                None => format!("-{s}"),
            })),
            Value::Double(v) => Some(Value::Double(-v)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v:e}"),
            Value::String { text, .. } => write!(f, "'{text}'"),
            Value::Bytes(bytes) => {
                write!(f, "x'")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                write!(f, "'")
            }
            Value::Date(s) => write!(f, "DATE '{s}'"),
            Value::Time(s) => write!(f, "TIME '{s}'"),
            Value::Timestamp(s) => write!(f, "TIMESTAMP '{s}'"),
        }
    }
}
