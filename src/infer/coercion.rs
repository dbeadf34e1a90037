//! Operators: arithmetic promotion, comparison classes, logic and predicates.

use crate::binder::bound::{BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::config::SessionConfig;
use crate::frontend::sql::ast::{BinaryOp, UnaryOp};
use crate::infer::{numeric_context, wrap};
use crate::types::consts::*;
use crate::types::field_type::{FieldType, width_from_signed};
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};
use crate::types::value::Value;

pub fn unary(op: UnaryOp, mut expr: BoundExpr, config: &SessionConfig) -> BoundExpr {
    let ty = match op {
        UnaryOp::Plus => return expr,
        UnaryOp::Not => {
            wrap::to_eval(&mut expr, EvalType::Int, config.charset);
            FieldType::boolean()
        }
        UnaryOp::BitNot => {
            wrap::to_eval(&mut expr, EvalType::Int, config.charset);
            bitwise_result()
        }
        UnaryOp::Minus => {
            let arg = expr.ty.clone();
            let eval = match arg.eval_type() {
                EvalType::Int if overflows_on_negation(&expr) => EvalType::Decimal,
                EvalType::Int => EvalType::Int,
                EvalType::Decimal => EvalType::Decimal,
                EvalType::Real => EvalType::Real,
                _ if arg.tp.is_temporal() => EvalType::Decimal,
                _ => EvalType::Real,
            };
            wrap::to_eval(&mut expr, eval, config.charset);
            let mut ty = FieldType::for_eval_type(eval, config.charset);
            match eval {
                EvalType::Real => ty.decimal = None,
                EvalType::Decimal if arg.eval_type() == EvalType::Decimal => {
                    ty.decimal = arg.decimal
                }
                _ => {}
            }
            ty.flen = width_from_signed(arg.flen_or_neg() + 1);
            ty
        }
    };
    BoundExpr::new(
        BoundExprKind::UnaryOp {
            op,
            expr: Box::new(expr),
        },
        ty,
    )
}

/// `-x` for an integer constant that has no signed 64-bit negation.
fn overflows_on_negation(expr: &BoundExpr) -> bool {
    match expr.constant() {
        Some(Value::UInt(v)) => v > i64::MIN.unsigned_abs(),
        Some(Value::Int(v)) => v == i64::MIN,
        _ => false,
    }
}

fn bitwise_result() -> FieldType {
    let mut ty = FieldType::new(FieldTypeTp::Longlong)
        .with_width(MAX_INT_WIDTH, 0)
        .binary();
    ty.flags.insert(FieldTypeFlag::UNSIGNED);
    ty
}

pub fn binary(
    op: BinaryOp,
    mut left: BoundExpr,
    mut right: BoundExpr,
    config: &SessionConfig,
) -> Result<BoundExpr, BindError> {
    let cs = config.charset;
    let ty = match op {
        BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => {
            wrap::to_eval(&mut left, EvalType::Int, cs);
            wrap::to_eval(&mut right, EvalType::Int, cs);
            FieldType::boolean()
        }
        BinaryOp::Eq
        | BinaryOp::NullSafeEq
        | BinaryOp::Neq
        | BinaryOp::Gt
        | BinaryOp::Gte
        | BinaryOp::Lt
        | BinaryOp::Lte => {
            let cmp = accurate_cmp_type(&left, &right);
            wrap::to_eval(&mut left, cmp, cs);
            wrap::to_eval(&mut right, cmp, cs);
            FieldType::boolean()
        }
        BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor
        | BinaryOp::ShiftLeft
        | BinaryOp::ShiftRight => {
            wrap::to_eval(&mut left, EvalType::Int, cs);
            wrap::to_eval(&mut right, EvalType::Int, cs);
            bitwise_result()
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => {
            additive(op, &mut left, &mut right, config)
        }
        BinaryOp::Div => divide(&mut left, &mut right, config),
        BinaryOp::IntDiv => int_divide(&mut left, &mut right, config),
        BinaryOp::Mod => modulo(&mut left, &mut right, config),
    };
    Ok(BoundExpr::new(
        BoundExprKind::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        ty,
    ))
}

pub fn arithmetic_class(a: &FieldType, b: &FieldType) -> EvalType {
    let (l, r) = (numeric_context(a), numeric_context(b));
    if l == EvalType::Real || r == EvalType::Real {
        EvalType::Real
    } else if l == EvalType::Decimal || r == EvalType::Decimal {
        EvalType::Decimal
    } else {
        EvalType::Int
    }
}

fn wrap_both(left: &mut BoundExpr, right: &mut BoundExpr, eval: EvalType, config: &SessionConfig) {
    wrap::to_eval(left, eval, config.charset);
    wrap::to_eval(right, eval, config.charset);
}

fn additive(
    op: BinaryOp,
    left: &mut BoundExpr,
    right: &mut BoundExpr,
    config: &SessionConfig,
) -> FieldType {
    let class = arithmetic_class(&left.ty, &right.ty);
    wrap_both(left, right, class, config);
    let mut ty = FieldType::for_eval_type(class, config.charset);
    match class {
        EvalType::Int => {
            let unsigned = left.ty.is_unsigned() || right.ty.is_unsigned();
            let signed_sub = op == BinaryOp::Sub && config.sql_mode.no_unsigned_subtraction;
            if unsigned && !signed_sub {
                ty.flags.insert(FieldTypeFlag::UNSIGNED);
            }
        }
        _ => set_flen_decimal(
            &mut ty,
            &left.ty,
            &right.ty,
            class == EvalType::Real,
            op == BinaryOp::Mul,
        ),
    }
    ty
}

fn set_flen_decimal(ret: &mut FieldType, a: &FieldType, b: &FieldType, is_real: bool, is_mul: bool) {
    let (Some(da), Some(db)) = (a.decimal, b.decimal) else {
        if is_real {
            ret.flen = None;
            ret.decimal = None;
        } else {
            ret.flen = Some(MAX_DECIMAL_WIDTH);
            ret.decimal = Some(MAX_DECIMAL_SCALE);
        }
        return;
    };

    let mut scale = if is_mul { da + db } else { da.max(db) };
    if !is_real {
        scale = scale.min(MAX_DECIMAL_SCALE);
    }
    ret.decimal = Some(scale);

    let (Some(fa), Some(fb)) = (a.flen, b.flen) else {
        ret.flen = None;
        return;
    };
    let (ia, ib) = (
        i64::from(fa) - i64::from(da),
        i64::from(fb) - i64::from(db),
    );
    let digits = if is_mul { ia + ib } else { ia.max(ib) };
    let cap = if is_real { MAX_REAL_WIDTH } else { MAX_DECIMAL_WIDTH };
    let flen = (digits + i64::from(scale) + 3).min(i64::from(cap));
    ret.flen = width_from_signed(flen);
}

fn divide(left: &mut BoundExpr, right: &mut BoundExpr, config: &SessionConfig) -> FieldType {
    let (a, b) = (left.ty.clone(), right.ty.clone());
    if arithmetic_class(&a, &b) == EvalType::Real {
        wrap_both(left, right, EvalType::Real, config);
        return FieldType::for_eval_type(EvalType::Real, config.charset);
    }

    wrap_both(left, right, EvalType::Decimal, config);
    let incr = config.div_precision_increment;
    let mut ty = FieldType::for_eval_type(EvalType::Decimal, config.charset);
    ty.decimal = Some((a.decimal.unwrap_or(0) + incr).min(MAX_DECIMAL_SCALE));
    ty.flen = Some(match a.flen {
        None => MAX_DECIMAL_WIDTH,
        Some(f) => (f + b.decimal.unwrap_or(0) + incr).min(MAX_DECIMAL_WIDTH),
    });
    ty
}

fn int_divide(left: &mut BoundExpr, right: &mut BoundExpr, config: &SessionConfig) -> FieldType {
    let unsigned = left.ty.is_unsigned() || right.ty.is_unsigned();
    let both_int =
        numeric_context(&left.ty) == EvalType::Int && numeric_context(&right.ty) == EvalType::Int;
    let arg_eval = if both_int { EvalType::Int } else { EvalType::Decimal };
    wrap_both(left, right, arg_eval, config);

    let mut ty = FieldType::for_eval_type(EvalType::Int, config.charset);
    if unsigned {
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
    }
    ty
}

fn modulo(left: &mut BoundExpr, right: &mut BoundExpr, config: &SessionConfig) -> FieldType {
    let (a, b) = (left.ty.clone(), right.ty.clone());
    let class = arithmetic_class(&a, &b);
    wrap_both(left, right, class, config);

    let mut ty = FieldType::for_eval_type(class, config.charset);
    if class != EvalType::Int {
        let is_decimal = class == EvalType::Decimal;
        ty.decimal = match (a.decimal, b.decimal) {
            (Some(x), Some(y)) if is_decimal => Some(x.max(y).min(MAX_DECIMAL_SCALE)),
            (Some(x), Some(y)) => Some(x.max(y)),
            _ => None,
        };
        let cap = if is_decimal { MAX_DECIMAL_WIDTH } else { MAX_REAL_WIDTH };
        ty.flen = match (a.flen, b.flen) {
            (Some(x), Some(y)) => Some(x.max(y).min(cap)),
            _ => None,
        };
    }
    if a.is_unsigned() {
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
    }
    ty
}

/// BIT, SET and ENUM compare as integers against integers.
fn is_hybrid(ty: &FieldType) -> bool {
    matches!(ty.tp, FieldTypeTp::Bit | FieldTypeTp::Set | FieldTypeTp::Enum)
}

pub fn is_date_like(tp: FieldTypeTp) -> bool {
    matches!(tp, FieldTypeTp::Date | FieldTypeTp::Datetime | FieldTypeTp::Timestamp)
}

pub fn base_cmp_type(a: &FieldType, b: &FieldType) -> EvalType {
    let (l, r) = (a.eval_type(), b.eval_type());
    let int_like = |e: EvalType, t: &FieldType| e == EvalType::Int || is_hybrid(t);
    if l.is_string_kind() && r.is_string_kind() {
        EvalType::String
    } else if int_like(l, a) && int_like(r, b) {
        EvalType::Int
    } else if (int_like(l, a) || l == EvalType::Decimal) && (int_like(r, b) || r == EvalType::Decimal)
    {
        EvalType::Decimal
    } else {
        EvalType::Real
    }
}

pub fn accurate_cmp_type(left: &BoundExpr, right: &BoundExpr) -> EvalType {
    let (a, b) = (&left.ty, &right.ty);
    let cmp = base_cmp_type(a, b);
    if a.tp == FieldTypeTp::Json || b.tp == FieldTypeTp::Json {
        return EvalType::Json;
    }
    if cmp == EvalType::String && (is_date_like(a.tp) || is_date_like(b.tp)) {
        return if a.tp == b.tp {
            a.eval_type()
        } else {
            EvalType::Datetime
        };
    }
    if a.tp == FieldTypeTp::Duration && b.tp == FieldTypeTp::Duration {
        return EvalType::Duration;
    }
    if cmp == EvalType::Real || cmp == EvalType::String {
        let (lc, rc) = (left.is_constant(), right.is_constant());
        let (le, re) = (a.eval_type(), b.eval_type());
        if (le == EvalType::Decimal && !lc && re.is_string_kind() && rc)
            || (re == EvalType::Decimal && !rc && le.is_string_kind() && lc)
        {
            return EvalType::Decimal;
        }
        if (is_temporal_column(left) && rc) || (is_temporal_column(right) && lc) {
            return EvalType::Datetime;
        }
    }
    cmp
}

fn is_temporal_column(expr: &BoundExpr) -> bool {
    matches!(expr.kind, BoundExprKind::ColumnRef { .. }) && expr.ty.tp.is_temporal()
}

pub fn list_cmp_type(args: &[BoundExpr]) -> EvalType {
    match args {
        [] => EvalType::String,
        [only] => only.ty.eval_type(),
        [first, second] => accurate_cmp_type(first, second),
        [first, rest @ ..] => {
            let cmp = rest
                .iter()
                .fold(cmp_class(&first.ty), |acc, arg| join_cmp(acc, cmp_class(&arg.ty)));
            if cmp == EvalType::String && args.iter().any(|a| is_date_like(a.ty.tp)) {
                EvalType::Datetime
            } else {
                cmp
            }
        }
    }
}

pub fn cmp_class(ty: &FieldType) -> EvalType {
    match ty.eval_type() {
        _ if is_hybrid(ty) => EvalType::Int,
        e if e.is_string_kind() => EvalType::String,
        e => e,
    }
}

pub fn join_cmp(a: EvalType, b: EvalType) -> EvalType {
    let exact = |e: EvalType| matches!(e, EvalType::Int | EvalType::Decimal);
    if a == b {
        a
    } else if exact(a) && exact(b) {
        EvalType::Decimal
    } else {
        EvalType::Real
    }
}

fn predicate(name: &'static str, args: Vec<BoundExpr>, negated: bool) -> BoundExpr {
    let call = BoundExpr::new(BoundExprKind::FunctionCall { name, args }, FieldType::boolean());
    negate_if(call, negated)
}

fn negate_if(expr: BoundExpr, negated: bool) -> BoundExpr {
    if !negated {
        return expr;
    }
    BoundExpr::new(
        BoundExprKind::UnaryOp {
            op: UnaryOp::Not,
            expr: Box::new(expr),
        },
        FieldType::boolean(),
    )
}

pub fn in_list(mut args: Vec<BoundExpr>, negated: bool, config: &SessionConfig) -> BoundExpr {
    let cmp = list_cmp_type(&args);
    for arg in &mut args {
        wrap::to_eval(arg, cmp, config.charset);
    }
    predicate("in", args, negated)
}

pub fn between(
    expr: BoundExpr,
    low: BoundExpr,
    high: BoundExpr,
    negated: bool,
    config: &SessionConfig,
) -> BoundExpr {
    let mut args = vec![expr, low, high];
    let cmp = list_cmp_type(&args);
    for arg in &mut args {
        wrap::to_eval(arg, cmp, config.charset);
    }
    predicate("between", args, negated)
}

const DEFAULT_ESCAPE: i64 = b'\\' as i64;

pub fn like(
    mut expr: BoundExpr,
    mut pattern: BoundExpr,
    escape: Option<BoundExpr>,
    negated: bool,
    config: &SessionConfig,
) -> Result<BoundExpr, BindError> {
    wrap::to_eval(&mut expr, EvalType::String, config.charset);
    wrap::to_eval(&mut pattern, EvalType::String, config.charset);

    let code = match escape.as_ref().map(|e| e.constant()) {
        None => DEFAULT_ESCAPE,
        Some(Some(Value::String { text, .. })) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (None, _) => DEFAULT_ESCAPE,
                (Some(c), None) => i64::from(u32::from(c)),
                _ => {
                    return Err(BindError::InvalidArgument(format!(
                        "LIKE escape must be a single character, got '{}'",
                        text
                    )));
                }
            }
        }
        Some(_) => {
            return Err(BindError::InvalidArgument(
                "LIKE escape must be a string constant".into(),
            ));
        }
    };
    let width = code.to_string().len() as u32;
    let escape = BoundExpr::literal(
        Value::Int(code),
        FieldType::new(FieldTypeTp::Longlong).with_width(width, 0).binary(),
    );
    Ok(predicate("like", vec![expr, pattern, escape], negated))
}

pub fn regexp(
    mut expr: BoundExpr,
    mut pattern: BoundExpr,
    negated: bool,
    config: &SessionConfig,
) -> BoundExpr {
    wrap::to_eval(&mut expr, EvalType::String, config.charset);
    wrap::to_eval(&mut pattern, EvalType::String, config.charset);
    predicate("regexp", vec![expr, pattern], negated)
}

pub fn is_bool(mut expr: BoundExpr, value: bool, negated: bool, config: &SessionConfig) -> BoundExpr {
    let eval = match expr.ty.eval_type() {
        EvalType::Datetime | EvalType::Timestamp | EvalType::Duration => EvalType::Int,
        EvalType::String | EvalType::Json => EvalType::Real,
        other => other,
    };
    wrap::to_eval(&mut expr, eval, config.charset);
    let name = if value { "istrue" } else { "isfalse" };
    predicate(name, vec![expr], negated)
}
