//! The type descriptor attached to every bound expression.
//!
//! `flen` and `decimal` use `None` for "unspecified"; zero is a real width.

use std::fmt;

use crate::types::charset::{COLLATION_BINARY, Charset};
use crate::types::consts::*;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub tp: FieldTypeTp,
    pub charset: Charset,
    pub collation: &'static str,
    pub flags: FieldTypeFlag,
    pub flen: Option<u32>,
    pub decimal: Option<u32>,
    pub elems: Vec<String>,
}

impl FieldType {
    pub fn new(tp: FieldTypeTp) -> Self {
        Self {
            tp,
            charset: Charset::Binary,
            collation: COLLATION_BINARY,
            flags: FieldTypeFlag::EMPTY,
            flen: None,
            decimal: None,
            elems: Vec::new(),
        }
    }

    pub fn with_flen(mut self, flen: Option<u32>) -> Self {
        self.flen = flen;
        self
    }

    pub fn with_decimal(mut self, decimal: Option<u32>) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn with_width(self, flen: u32, decimal: u32) -> Self {
        self.with_flen(Some(flen)).with_decimal(Some(decimal))
    }

    pub fn with_flags(mut self, flags: FieldTypeFlag) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.set_charset(charset);
        self
    }

    pub fn binary(mut self) -> Self {
        self.set_binary_charset();
        self
    }

    pub fn set_charset(&mut self, charset: Charset) {
        self.charset = charset;
        self.collation = charset.default_collation();
    }

    pub fn set_binary_charset(&mut self) {
        self.set_charset(Charset::Binary);
        self.flags.insert(FieldTypeFlag::BINARY);
    }

    pub fn for_eval_type(eval: EvalType, charset: Charset) -> Self {
        match eval {
            EvalType::Int => FieldType::new(FieldTypeTp::Longlong)
                .with_width(MAX_INT_WIDTH, 0)
                .binary(),
            EvalType::Real => FieldType::new(FieldTypeTp::Double)
                .with_flen(Some(MAX_REAL_WIDTH))
                .binary(),
            EvalType::Decimal => FieldType::new(FieldTypeTp::NewDecimal)
                .with_width(DEFAULT_DECIMAL_WIDTH, 0)
                .binary(),
            EvalType::String => FieldType::new(FieldTypeTp::VarString)
                .with_flen(Some(0))
                .with_charset(charset),
            EvalType::Datetime => FieldType::new(FieldTypeTp::Datetime)
                .with_width(MAX_DATETIME_WIDTH_WITH_FSP, MAX_FSP)
                .binary(),
            EvalType::Timestamp => FieldType::new(FieldTypeTp::Timestamp)
                .with_width(MAX_DATETIME_WIDTH_WITH_FSP, MAX_FSP)
                .binary(),
            EvalType::Duration => FieldType::new(FieldTypeTp::Duration)
                .with_width(MAX_DURATION_WIDTH_WITH_FSP, MAX_FSP)
                .binary(),
            EvalType::Json => {
                let mut ft = FieldType::new(FieldTypeTp::Json)
                    .with_width(MAX_BLOB_WIDTH, 0)
                    .with_charset(Charset::Utf8mb4);
                ft.flags.insert(FieldTypeFlag::BINARY);
                ft
            }
        }
    }

    pub fn boolean() -> Self {
        FieldType::new(FieldTypeTp::Longlong).with_width(1, 0).binary()
    }

    pub fn eval_type(&self) -> EvalType {
        self.tp.eval_type()
    }

    pub fn is_unsigned(&self) -> bool {
        self.flags.contains(FieldTypeFlag::UNSIGNED)
    }

    pub fn has_binary_flag(&self) -> bool {
        self.flags.contains(FieldTypeFlag::BINARY)
    }

    pub fn is_binary_str(&self) -> bool {
        self.collation == COLLATION_BINARY && self.holds_text()
    }

    pub fn is_non_binary_str(&self) -> bool {
        self.collation != COLLATION_BINARY && self.holds_text()
    }

    // SET and ENUM count as strings for charset purposes.
    fn holds_text(&self) -> bool {
        self.tp.is_string() || matches!(self.tp, FieldTypeTp::Set | FieldTypeTp::Enum)
    }

    /// Width with "unspecified" read as -1, for the rules that do arithmetic on it.
    pub fn flen_or_neg(&self) -> i64 {
        self.flen.map_or(-1, i64::from)
    }

    pub fn decimal_or_neg(&self) -> i64 {
        self.decimal.map_or(-1, i64::from)
    }
}

pub fn width_from_signed(v: i64) -> Option<u32> {
    u32::try_from(v).ok()
}

fn fmt_width(v: Option<u32>) -> String {
    v.map_or_else(|| "-1".to_string(), |v| v.to_string())
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}) charset={} collate={} flags={}",
            self.tp,
            fmt_width(self.flen),
            fmt_width(self.decimal),
            self.charset,
            self.collation,
            self.flags
        )
    }
}
