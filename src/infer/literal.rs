//! Descriptors of literal constants and user variables.

use crate::binder::bound::{BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::config::SessionConfig;
use crate::frontend::sql::ast::Literal;
use crate::types::charset::Charset;
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::FieldTypeTp;
use crate::types::value::Value;

pub fn bind_literal(lit: &Literal, config: &SessionConfig) -> Result<BoundExpr, BindError> {
    let expr = match lit {
        Literal::Null => BoundExpr::literal(
            Value::Null,
            FieldType::new(FieldTypeTp::Null).with_width(0, 0).binary(),
        ),
        Literal::Bool(b) => {
            let mut ty = FieldType::new(FieldTypeTp::Longlong).with_width(1, 0).binary();
            ty.flags.insert(FieldTypeFlag::IS_BOOLEAN);
            BoundExpr::literal(Value::Bool(*b), ty)
        }
        Literal::Integer(text) => integer(text)?,
        Literal::Decimal(text) => decimal(text)?,
        Literal::Float(text) => float(text)?,
        Literal::String { value, introducer } => {
            let charset = match introducer {
                Some(name) => Charset::from_name(name).ok_or_else(|| {
                    BindError::InvalidArgument(format!("unknown character set '_{}'", name))
                })?,
                None => config.charset,
            };
            string(value, charset)
        }
        Literal::Hex(digits) => hex(digits)?,
        Literal::Bit(digits) => bit(digits)?,
        Literal::Date(text) => BoundExpr::literal(
            Value::Date(text.clone()),
            FieldType::new(FieldTypeTp::Date)
                .with_width(MAX_DATE_WIDTH, 0)
                .binary(),
        ),
        Literal::Time(text) => {
            let fsp = literal_fsp(text);
            BoundExpr::literal(
                Value::Time(text.clone()),
                FieldType::new(FieldTypeTp::Duration)
                    .with_width(with_fsp(MAX_DURATION_WIDTH_NO_FSP, fsp), fsp)
                    .binary(),
            )
        }
        Literal::Timestamp(text) => {
            let fsp = literal_fsp(text);
            BoundExpr::literal(
                Value::Timestamp(text.clone()),
                FieldType::new(FieldTypeTp::Datetime)
                    .with_width(with_fsp(MAX_DATETIME_WIDTH_NO_FSP, fsp), fsp)
                    .binary(),
            )
        }
    };
    Ok(expr)
}

pub fn user_var(name: &str, config: &SessionConfig) -> BoundExpr {
    let name_ty = FieldType::new(FieldTypeTp::VarString)
        .with_charset(config.charset)
        .with_flen(Some(name.chars().count() as u32));
    let arg = BoundExpr::literal(
        Value::String {
            text: name.to_string(),
            charset: config.charset,
        },
        name_ty,
    );
    BoundExpr::new(
        BoundExprKind::FunctionCall {
            name: "getvar",
            args: vec![arg],
        },
        FieldType::new(FieldTypeTp::VarString)
            .with_charset(config.charset)
            .with_flen(Some(MAX_FIELD_VARCHAR_LENGTH)),
    )
}

pub fn with_fsp(base: u32, fsp: u32) -> u32 {
    if fsp > 0 { base + 1 + fsp } else { base }
}

/// Digits after the last `.` of a temporal literal, clamped to 6.
pub fn literal_fsp(text: &str) -> u32 {
    let trimmed = text.trim();
    match trimmed.rfind('.') {
        Some(pos) => {
            let frac = trimmed[pos + 1..]
                .chars()
                .take_while(char::is_ascii_digit)
                .count() as u32;
            frac.min(MAX_FSP)
        }
        None => 0,
    }
}

fn invalid(kind: &str, text: &str) -> BindError {
    BindError::InvalidArgument(format!("malformed {} literal '{}'", kind, text))
}

fn int_type(flen: usize) -> FieldType {
    FieldType::new(FieldTypeTp::Longlong)
        .with_width(flen as u32, 0)
        .binary()
}

fn integer(text: &str) -> Result<BoundExpr, BindError> {
    if let Ok(v) = text.parse::<i64>() {
        return Ok(BoundExpr::literal(Value::Int(v), int_type(v.to_string().len())));
    }
    if let Ok(v) = text.parse::<u64>() {
        let mut ty = int_type(v.to_string().len());
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
        return Ok(BoundExpr::literal(Value::UInt(v), ty));
    }
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return decimal(text);
    }
    Err(invalid("integer", text))
}

fn decimal(text: &str) -> Result<BoundExpr, BindError> {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text, ""),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int_part) || !digits(frac_part) || (int_part.is_empty() && frac_part.is_empty()) {
        return Err(invalid("decimal", text));
    }

    let int_part = int_part.trim_start_matches('0');
    if int_part.len() + frac_part.len() > MAX_DECIMAL_WIDTH as usize {
        return float(text);
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let canonical = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    };
    let scale = frac_part.len() as u32;
    let ty = FieldType::new(FieldTypeTp::NewDecimal)
        .with_width(canonical.len() as u32, scale)
        .binary();
    Ok(BoundExpr::literal(Value::Decimal(canonical), ty))
}

fn float(text: &str) -> Result<BoundExpr, BindError> {
    let v: f64 = text.parse().map_err(|_| invalid("float", text))?;
    if !v.is_finite() {
        return Err(BindError::InvalidArgument(format!("'{}' is out of DOUBLE range", text)));
    }
    let rendered = format!("{}", v);
    let ty = FieldType::new(FieldTypeTp::Double)
        .with_flen(Some(rendered.len() as u32))
        .binary();
    Ok(BoundExpr::literal(Value::Double(v), ty))
}

fn string(text: &str, charset: Charset) -> BoundExpr {
    let mut ty = FieldType::new(FieldTypeTp::VarString)
        .with_charset(charset)
        .with_flen(Some(text.chars().count() as u32));
    if charset.is_binary() {
        ty.flags.insert(FieldTypeFlag::BINARY);
    }
    BoundExpr::literal(
        Value::String {
            text: text.to_string(),
            charset,
        },
        ty,
    )
}

fn hex(digits: &str) -> Result<BoundExpr, BindError> {
    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    let bytes = (0..padded.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&padded[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| invalid("hexadecimal", digits))?;
    let ty = FieldType::new(FieldTypeTp::VarString)
        .with_width(3 * bytes.len() as u32, 0)
        .with_flags(FieldTypeFlag::UNSIGNED)
        .binary();
    Ok(BoundExpr::literal(Value::Bytes(bytes), ty))
}

fn bit(digits: &str) -> Result<BoundExpr, BindError> {
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid("bit", digits));
    }
    let byte_len = digits.len().div_ceil(8);
    let padded = format!("{:0>width$}", digits, width = byte_len * 8);
    let bytes = (0..byte_len)
        .map(|i| u8::from_str_radix(&padded[i * 8..i * 8 + 8], 2))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| invalid("bit", digits))?;
    let ty = FieldType::new(FieldTypeTp::VarString)
        .with_width(byte_len as u32, 0)
        .binary();
    Ok(BoundExpr::literal(Value::Bytes(bytes), ty))
}
