//! Explicit conversions: `CAST`, `CONVERT(x, type)`, `CONVERT(x USING cs)` and `BINARY x`.

use crate::binder::bound::{BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::config::SessionConfig;
use crate::frontend::sql::ast::{CastKind, CastTarget};
use crate::infer::literal::with_fsp;
use crate::infer::{finish_string_result, wrap};
use crate::types::charset::Charset;
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};
use crate::types::value::Value;

const INTEGER_CAST_WIDTH: u32 = 22;

pub fn cast(expr: BoundExpr, target: &CastTarget, config: &SessionConfig) -> Result<BoundExpr, BindError> {
    let mut ty = target_type(target, &expr.ty, config)?;
    finish_string_result(&mut ty);
    Ok(BoundExpr::new(
        BoundExprKind::Cast {
            expr: Box::new(expr),
            implicit: false,
        },
        ty,
    ))
}

pub fn target_type(
    target: &CastTarget,
    source: &FieldType,
    config: &SessionConfig,
) -> Result<FieldType, BindError> {
    let ty = match target.kind {
        CastKind::Binary => match target.length {
            Some(n) => FieldType::new(FieldTypeTp::String).with_flen(Some(n)).binary(),
            // only string sources carry their width over
            None if is_string_source(source) => FieldType::new(FieldTypeTp::VarString)
                .with_flen(source.flen)
                .binary(),
            None => FieldType::new(FieldTypeTp::VarString).binary(),
        },
        CastKind::Char => {
            let charset = match &target.charset {
                Some(name) => lookup_charset(name)?,
                None => config.charset,
            };
            let mut ty = FieldType::new(FieldTypeTp::VarString)
                .with_charset(charset)
                .with_flen(target.length);
            if charset.is_binary() {
                ty.flags.insert(FieldTypeFlag::BINARY);
            }
            ty
        }
        CastKind::Date => FieldType::new(FieldTypeTp::Date)
            .with_width(MAX_DATE_WIDTH, 0)
            .binary(),
        CastKind::Datetime => {
            let fsp = cast_fsp(target);
            FieldType::new(FieldTypeTp::Datetime)
                .with_width(with_fsp(MAX_DATETIME_WIDTH_NO_FSP, fsp), fsp)
                .binary()
        }
        CastKind::Time => {
            let fsp = cast_fsp(target);
            FieldType::new(FieldTypeTp::Duration)
                .with_width(with_fsp(MAX_DURATION_WIDTH_NO_FSP, fsp), fsp)
                .binary()
        }
        CastKind::Decimal => {
            let (flen, scale) = decimal_precision(target.length, target.scale)?;
            FieldType::new(FieldTypeTp::NewDecimal)
                .with_width(flen, scale)
                .binary()
        }
        CastKind::Signed | CastKind::Unsigned => {
            let mut ty = FieldType::new(FieldTypeTp::Longlong)
                .with_width(INTEGER_CAST_WIDTH, 0)
                .binary();
            if target.kind == CastKind::Unsigned {
                ty.flags.insert(FieldTypeFlag::UNSIGNED);
            }
            ty
        }
        CastKind::Json => {
            let mut ty = FieldType::new(FieldTypeTp::Json)
                .with_width(JSON_CAST_WIDTH, 0)
                .with_charset(Charset::Utf8mb4);
            ty.flags
                .insert(FieldTypeFlag::BINARY | FieldTypeFlag::PARSE_TO_JSON);
            ty
        }
        CastKind::Double => FieldType::new(FieldTypeTp::Double)
            .with_flen(Some(MAX_DOUBLE_PRECISION_LENGTH))
            .binary(),
    };
    Ok(ty)
}

fn is_string_source(source: &FieldType) -> bool {
    source.tp != FieldTypeTp::Null && source.eval_type() == EvalType::String
}

fn cast_fsp(target: &CastTarget) -> u32 {
    target.length.unwrap_or(0).min(MAX_FSP)
}

/// `DECIMAL[(m[,d])]` precision: defaults (11,0), `m` alone means scale 0.
pub fn decimal_precision(m: Option<u32>, d: Option<u32>) -> Result<(u32, u32), BindError> {
    let flen = m.unwrap_or(DEFAULT_DECIMAL_WIDTH).min(MAX_DECIMAL_WIDTH);
    let scale = d.unwrap_or(0).min(MAX_DECIMAL_SCALE);
    if scale > flen {
        return Err(BindError::InvalidArgument(format!(
            "scale {} is larger than precision {} in DECIMAL({},{})",
            scale, flen, flen, scale
        )));
    }
    Ok((flen, scale))
}

fn lookup_charset(name: &str) -> Result<Charset, BindError> {
    Charset::from_name(name)
        .ok_or_else(|| BindError::InvalidArgument(format!("unknown character set '{}'", name)))
}

pub fn convert_using(mut expr: BoundExpr, charset: &str, config: &SessionConfig) -> Result<BoundExpr, BindError> {
    let cs = lookup_charset(charset)?;
    wrap::to_eval(&mut expr, EvalType::String, config.charset);

    let name_arg = BoundExpr::literal(
        Value::String {
            text: cs.name().to_string(),
            charset: config.charset,
        },
        FieldType::new(FieldTypeTp::VarString)
            .with_charset(config.charset)
            .with_flen(Some(cs.name().len() as u32)),
    );
    let mut ty = FieldType::new(FieldTypeTp::LongBlob)
        .with_charset(cs)
        .with_flen(Some(MAX_BLOB_WIDTH));
    if cs.is_binary() {
        ty.flags.insert(FieldTypeFlag::BINARY);
    }
    Ok(BoundExpr::new(
        BoundExprKind::FunctionCall {
            name: "convert",
            args: vec![expr, name_arg],
        },
        ty,
    ))
}
