//! Numeric functions.

use crate::binder::errors::BindError;
use crate::infer::CallCtx;
use crate::infer::functions::{Registry, all_args, define, int_result, real_result};
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};

/// Integer-valued arguments with more digits than this overflow a signed
/// 64-bit result, so FLOOR/CEIL keep them as decimals.
const FLOOR_CEIL_INT_DIGITS: u32 = MAX_INT_WIDTH - 2;

pub(crate) fn register(registry: &mut Registry) {
    define(
        registry,
        &[
            "acos", "asin", "cos", "cot", "degrees", "exp", "ln", "log10", "log2", "radians",
            "sin", "sqrt", "tan",
        ],
        1,
        Some(1),
        |ctx| Ok(real_result(ctx, &[EvalType::Real])),
    );
    define(registry, &["log", "atan"], 1, Some(2), real_args);
    define(registry, &["atan2", "pow", "power"], 2, Some(2), real_args);
    define(registry, &["rand"], 0, Some(1), |ctx| {
        Ok(real_result(ctx, &[EvalType::Int]))
    });
    define(registry, &["pi"], 0, Some(0), |_| {
        Ok(FieldType::new(FieldTypeTp::Double).with_width(8, 6).binary())
    });

    define(registry, &["floor", "ceil", "ceiling"], 1, Some(1), floor_ceil);
    define(registry, &["abs"], 1, Some(1), abs);
    define(registry, &["round"], 1, Some(2), round);
    define(registry, &["truncate"], 2, Some(2), truncate);
    define(registry, &["sign"], 1, Some(1), |ctx| {
        let eval = numeric_arg(ctx.arg_ty(0));
        Ok(int_result(ctx, MAX_INT_WIDTH, &[eval]))
    });
    define(registry, &["crc32"], 1, Some(1), |ctx| {
        let mut ty = int_result(ctx, 10, &[EvalType::String]);
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
        Ok(ty)
    });
}

fn real_args(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let arg_tps = all_args(ctx, EvalType::Real);
    Ok(real_result(ctx, &arg_tps))
}

fn numeric_arg(ty: &FieldType) -> EvalType {
    match ty.eval_type() {
        EvalType::Int => EvalType::Int,
        EvalType::Decimal => EvalType::Decimal,
        _ => EvalType::Real,
    }
}

fn rounded(eval: EvalType, arg: &FieldType, flen: Option<u32>, decimal: Option<u32>) -> FieldType {
    let tp = match eval {
        EvalType::Int => FieldTypeTp::Longlong,
        EvalType::Decimal => FieldTypeTp::NewDecimal,
        _ => FieldTypeTp::Double,
    };
    let mut ty = FieldType::new(tp)
        .with_flen(flen)
        .with_decimal(decimal)
        .binary();
    if eval == EvalType::Int && arg.is_unsigned() {
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
    }
    ty
}

fn floor_ceil(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let arg_eval = numeric_arg(ctx.arg_ty(0));
    ctx.wrap(0, arg_eval);
    let arg = ctx.arg_ty(0).clone();

    let ret = match arg_eval {
        EvalType::Int if arg.flen.is_some_and(|f| f > FLOOR_CEIL_INT_DIGITS) => EvalType::Decimal,
        EvalType::Decimal => {
            let int_digits = arg.flen_or_neg() - arg.decimal.map_or(0, i64::from);
            if arg.flen.is_none() || int_digits > i64::from(FLOOR_CEIL_INT_DIGITS) {
                EvalType::Decimal
            } else {
                EvalType::Int
            }
        }
        eval => eval,
    };
    Ok(rounded(ret, &arg, arg.flen, Some(0)))
}

fn abs(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let eval = numeric_arg(ctx.arg_ty(0));
    ctx.wrap(0, eval);
    let arg = ctx.arg_ty(0).clone();
    let ty = match eval {
        EvalType::Int => rounded(eval, &arg, arg.flen, Some(0)),
        EvalType::Decimal => rounded(eval, &arg, arg.flen, arg.decimal),
        _ => rounded(eval, &arg, Some(MAX_DOUBLE_PRECISION_LENGTH), None),
    };
    Ok(ty)
}

fn const_scale(ctx: &CallCtx) -> Option<i64> {
    ctx.constant(1).and_then(|v| v.as_i64())
}

fn round(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let eval = numeric_arg(ctx.arg_ty(0));
    ctx.builtin(eval, &[eval, EvalType::Int]);
    let arg = ctx.arg_ty(0).clone();

    let decimal = if eval == EvalType::Int || ctx.arg_count() == 1 {
        Some(0)
    } else {
        match const_scale(ctx) {
            Some(d) => Some(d.clamp(0, i64::from(MAX_DECIMAL_SCALE)) as u32),
            None if eval == EvalType::Decimal => arg.decimal,
            None => None,
        }
    };
    Ok(rounded(eval, &arg, arg.flen, decimal))
}

fn truncate(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let eval = numeric_arg(ctx.arg_ty(0));
    ctx.builtin(eval, &[eval, EvalType::Int]);
    let arg = ctx.arg_ty(0).clone();

    if eval == EvalType::Int {
        return Ok(rounded(eval, &arg, arg.flen, Some(0)));
    }
    let ty = match const_scale(ctx) {
        Some(d) if d > 0 => {
            let d = d.min(i64::from(MAX_DECIMAL_SCALE)) as u32;
            // digits kept after the point plus the point itself
            rounded(eval, &arg, arg.flen.map(|f| f + d + 1), Some(d))
        }
        Some(_) => rounded(eval, &arg, arg.flen, Some(0)),
        None => rounded(eval, &arg, arg.flen, arg.decimal),
    };
    Ok(ty)
}
