//! Result types of IF, IFNULL, NULLIF, CASE, COALESCE, GREATEST and LEAST.
//!
//! These functions return one of their arguments, so the result type is a
//! merge of the candidate types rather than a fixed class.

use crate::binder::bound::{BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::config::SessionConfig;
use crate::infer::coercion::{cmp_class, is_date_like, join_cmp};
use crate::infer::{CallCtx, default_flags, finish_string_result, wrap};
use crate::types::charset::Charset;
use crate::types::field_type::{FieldType, width_from_signed};
use crate::types::flags::FieldTypeFlag;
use crate::types::merge::{agg_field_type, aggregate_eval_type};
use crate::types::type_code::{EvalType, FieldTypeTp};

fn null_type() -> FieldType {
    FieldType::new(FieldTypeTp::Null).with_width(0, 0).binary()
}

pub fn control_type(lhs: &FieldType, rhs: &FieldType) -> FieldType {
    let mut ty = if lhs.tp == FieldTypeTp::Null {
        rhs.clone()
    } else if rhs.tp == FieldTypeTp::Null {
        lhs.clone()
    } else {
        merge_pair(lhs, rhs)
    };

    match ty.eval_type() {
        EvalType::Int => ty.decimal = Some(0),
        EvalType::String if lhs.tp != FieldTypeTp::Null || rhs.tp != FieldTypeTp::Null => {
            ty.decimal = None
        }
        _ => {}
    }
    ty
}

fn merge_pair(lhs: &FieldType, rhs: &FieldType) -> FieldType {
    let mut ty = agg_field_type(&[lhs, rhs]);
    let eval = aggregate_eval_type(&[lhs, rhs], &mut ty.flags);

    ty.decimal = if eval == EvalType::Int {
        Some(0)
    } else {
        match (lhs.decimal, rhs.decimal) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        }
    };

    if lhs.is_non_binary_str() && !rhs.is_binary_str() {
        ty.set_charset(Charset::Utf8mb4);
        ty.flags = FieldTypeFlag::EMPTY;
        if lhs.has_binary_flag() || !rhs.is_non_binary_str() {
            ty.flags.insert(FieldTypeFlag::BINARY);
        }
    } else if rhs.is_non_binary_str() && !lhs.is_binary_str() {
        ty.set_charset(Charset::Utf8mb4);
        ty.flags = FieldTypeFlag::EMPTY;
        if rhs.has_binary_flag() || !lhs.is_non_binary_str() {
            ty.flags.insert(FieldTypeFlag::BINARY);
        }
    } else if lhs.is_binary_str() || rhs.is_binary_str() || !eval.is_string_kind() {
        ty.set_binary_charset();
    } else {
        ty.set_charset(Charset::Utf8mb4);
        ty.flags = FieldTypeFlag::EMPTY;
    }

    if matches!(eval, EvalType::Int | EvalType::Decimal) {
        let int_part = |t: &FieldType| {
            let mut len = t.flen_or_neg();
            if !t.is_unsigned() {
                len -= 1;
            }
            len
        };
        let mut l = int_part(lhs);
        let mut r = int_part(rhs);
        if lhs.decimal.is_some() {
            l -= lhs.decimal_or_neg();
            // the right side is only adjusted when the left scale is known
            r -= rhs.decimal_or_neg();
        }
        ty.flen = width_from_signed(l.max(r) + ty.decimal_or_neg() + 1);
    } else {
        ty.flen = match (lhs.flen, rhs.flen) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
    }
    ty
}

pub fn if_fn(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = control_type(ctx.arg_ty(1), ctx.arg_ty(2));
    let eval = ty.eval_type();
    ctx.wrap(0, EvalType::Int);
    ctx.wrap(1, eval);
    ctx.wrap(2, eval);
    ty.flags |= default_flags(eval);
    Ok(ty)
}

pub fn ifnull(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = control_type(ctx.arg_ty(0), ctx.arg_ty(1));
    let eval = ty.eval_type();
    ctx.wrap(0, eval);
    ctx.wrap(1, eval);
    ty.flags |= default_flags(eval);
    Ok(ty)
}

pub fn nullif(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = control_type(&null_type(), ctx.arg_ty(0));
    ty.flags |= default_flags(ty.eval_type());
    Ok(ty)
}

pub fn coalesce(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let tys: Vec<FieldType> = ctx.args.iter().map(|a| a.ty.clone()).collect();
    let refs: Vec<&FieldType> = tys.iter().collect();
    let mut agg = agg_field_type(&refs);
    let agg_eval = aggregate_eval_type(&refs, &mut agg.flags);
    let ret_eval = agg.eval_type();
    ctx.wrap_all(ret_eval);

    if agg.tp == FieldTypeTp::Null {
        return Ok(null_type());
    }

    let mut scale: i64 = -1;
    let mut max_int_len: i64 = 0;
    let mut max_flen: i64 = 0;
    for t in &tys {
        let dec = t.decimal_or_neg();
        scale = scale.max(dec);
        let mut int_len = t.flen_or_neg();
        if dec > 0 {
            int_len -= dec + 1;
        }
        if !t.is_unsigned() {
            int_len -= 1;
        }
        max_int_len = max_int_len.max(int_len);
        if t.flen_or_neg() > max_flen || t.flen.is_none() {
            max_flen = t.flen_or_neg();
        }
    }

    if matches!(agg_eval, EvalType::Int | EvalType::Decimal) {
        let mut flen = max_int_len + scale;
        if scale > 0 {
            flen += 1;
        }
        if !agg.is_unsigned() {
            flen += 1;
        }
        agg.flen = width_from_signed(flen);
        agg.decimal = width_from_signed(scale);
        return Ok(agg);
    }

    let mut ty = FieldType::for_eval_type(ret_eval, ctx.charset());
    ty.flags |= agg.flags;
    ty.flen = width_from_signed(max_flen);
    ty.decimal = if ret_eval == EvalType::String {
        None
    } else {
        width_from_signed(scale)
    };
    Ok(ty)
}

pub fn min_max(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let tys: Vec<&FieldType> = ctx.args.iter().map(|a| &a.ty).collect();
    let all_str = tys.iter().all(|t| t.tp.is_string());
    let datetime_found = tys.iter().any(|t| is_date_like(t.tp));
    let cmp = tys
        .iter()
        .skip(1)
        .fold(cmp_class(tys[0]), |acc, t| join_cmp(acc, cmp_class(t)));

    let as_datetime = !all_str && datetime_found;
    let eval = if as_datetime { EvalType::String } else { cmp };
    let arg_tps = vec![eval; ctx.arg_count()];
    let mut ty = ctx.builtin(eval, &arg_tps);
    if as_datetime {
        ty.set_binary_charset();
    }
    if eval == EvalType::String {
        ty.flen = ctx
            .args
            .iter()
            .try_fold(0u32, |acc, a| a.ty.flen.map(|f| acc.max(f)));
    }
    Ok(ty)
}

pub fn case_when(
    mut branches: Vec<(BoundExpr, BoundExpr)>,
    mut else_expr: Option<BoundExpr>,
    config: &SessionConfig,
) -> BoundExpr {
    let results: Vec<&FieldType> = branches
        .iter()
        .map(|(_, then)| &then.ty)
        .chain(else_expr.iter().map(|e| &e.ty))
        .collect();

    let mut decimal = results.first().map_or(-1, |t| t.decimal_or_neg());
    let mut flen: i64 = 0;
    let mut binary_str = false;
    let mut binary_flag = false;
    for t in &results {
        decimal = decimal.max(t.decimal_or_neg());
        flen = flen.max(t.flen_or_neg());
        binary_str |= t.is_binary_str();
        binary_flag |= !t.is_non_binary_str();
    }

    let mut ty = agg_field_type(&results);
    let eval = ty.eval_type();
    if eval == EvalType::Int {
        decimal = 0;
    }
    ty.decimal = width_from_signed(decimal);
    ty.flen = width_from_signed(flen);
    if eval.is_string_kind() && !binary_str {
        ty.set_charset(Charset::Utf8mb4);
    }
    if binary_flag {
        ty.flags.insert(FieldTypeFlag::BINARY);
    }
    if ty.tp == FieldTypeTp::Null {
        ty.flen = Some(0);
        ty.decimal = None;
        ty.set_binary_charset();
    } else if eval == EvalType::String {
        ty.decimal = None;
    }

    for (when, then) in &mut branches {
        wrap::to_eval(when, EvalType::Int, config.charset);
        wrap::to_eval(then, eval, config.charset);
    }
    if let Some(e) = else_expr.as_mut() {
        wrap::to_eval(e, eval, config.charset);
    }
    ty.flags |= default_flags(eval);
    finish_string_result(&mut ty);

    BoundExpr::new(
        BoundExprKind::CaseWhen {
            branches,
            else_expr: else_expr.map(Box::new),
        },
        ty,
    )
}
