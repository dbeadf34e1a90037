//! Implicit argument conversions.
//!
//! A builtin declares the evaluation class it wants for each argument; an
//! argument of another class is wrapped in an implicit cast whose descriptor
//! is computed here. The `as_*` helpers return `None` when no cast is needed.

use crate::binder::bound::BoundExpr;
use crate::types::charset::Charset;
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};

pub fn to_eval(expr: &mut BoundExpr, eval: EvalType, charset: Charset) {
    if let Some(ty) = target_type(&expr.ty, eval, charset) {
        expr.cast_in_place(ty);
    }
}

pub fn target_type(from: &FieldType, eval: EvalType, charset: Charset) -> Option<FieldType> {
    match eval {
        EvalType::Int => as_int(from),
        EvalType::Real => as_real(from),
        EvalType::Decimal => as_decimal(from),
        EvalType::String => as_string(from, charset),
        EvalType::Datetime => as_time(from, FieldTypeTp::Datetime),
        EvalType::Timestamp => as_time(from, FieldTypeTp::Timestamp),
        EvalType::Duration => as_duration(from),
        EvalType::Json => as_json(from),
    }
}

fn unsigned_of(from: &FieldType) -> FieldTypeFlag {
    from.flags & FieldTypeFlag::UNSIGNED
}

pub fn as_int(from: &FieldType) -> Option<FieldType> {
    if from.eval_type() == EvalType::Int {
        return None;
    }
    let mut ty = FieldType::new(FieldTypeTp::Longlong)
        .with_flen(from.flen)
        .with_decimal(Some(0))
        .binary();
    ty.flags |= unsigned_of(from);
    Some(ty)
}

pub fn as_real(from: &FieldType) -> Option<FieldType> {
    if from.eval_type() == EvalType::Real {
        return None;
    }
    let mut ty = FieldType::new(FieldTypeTp::Double)
        .with_flen(Some(MAX_REAL_WIDTH))
        .binary();
    ty.flags |= unsigned_of(from);
    Some(ty)
}

pub fn as_decimal(from: &FieldType) -> Option<FieldType> {
    let eval = from.eval_type();
    if eval == EvalType::Decimal {
        return None;
    }
    let flen = if eval == EvalType::Int {
        Some(MAX_INT_WIDTH)
    } else {
        from.flen
    };
    let mut ty = FieldType::new(FieldTypeTp::NewDecimal)
        .with_flen(flen)
        .with_decimal(from.decimal)
        .binary();
    ty.flags |= unsigned_of(from);
    Some(ty)
}

pub fn as_string(from: &FieldType, charset: Charset) -> Option<FieldType> {
    let flen = match from.eval_type() {
        EvalType::String => return None,
        EvalType::Int => Some(MAX_INT_WIDTH),
        // sign and decimal point
        EvalType::Decimal => from.flen.map(|f| f + 2),
        _ => from.flen,
    };
    Some(
        FieldType::new(FieldTypeTp::VarString)
            .with_charset(charset)
            .with_flen(flen),
    )
}

pub fn as_time(from: &FieldType, target: FieldTypeTp) -> Option<FieldType> {
    if from.tp == target
        || (matches!(from.tp, FieldTypeTp::Date | FieldTypeTp::Timestamp)
            && target == FieldTypeTp::Datetime)
    {
        return None;
    }
    let fsp = if from.tp.is_temporal() {
        from.decimal.unwrap_or(0)
    } else {
        MAX_FSP
    };
    let flen = match target {
        FieldTypeTp::Date => MAX_DATE_WIDTH,
        _ if fsp > 0 => MAX_DATETIME_WIDTH_NO_FSP + 1 + fsp,
        _ => MAX_DATETIME_WIDTH_NO_FSP,
    };
    Some(FieldType::new(target).with_width(flen, fsp).binary())
}

pub fn as_duration(from: &FieldType) -> Option<FieldType> {
    if from.tp == FieldTypeTp::Duration {
        return None;
    }
    let fsp = match from.tp {
        FieldTypeTp::Datetime | FieldTypeTp::Timestamp | FieldTypeTp::Date => {
            from.decimal.unwrap_or(0)
        }
        _ => MAX_FSP,
    };
    let flen = if fsp > 0 {
        MAX_DURATION_WIDTH_NO_FSP + 1 + fsp
    } else {
        MAX_DURATION_WIDTH_NO_FSP
    };
    Some(
        FieldType::new(FieldTypeTp::Duration)
            .with_width(flen, fsp)
            .binary(),
    )
}

pub fn as_json(from: &FieldType) -> Option<FieldType> {
    if from.eval_type() == EvalType::Json && !from.flags.contains(FieldTypeFlag::PARSE_TO_JSON)
    {
        return None;
    }
    let mut ty = FieldType::new(FieldTypeTp::Json)
        .with_width(JSON_IMPLICIT_CAST_WIDTH, 0)
        .with_charset(Charset::Utf8mb4);
    ty.flags.insert(FieldTypeFlag::BINARY);
    Some(ty)
}
