//! String functions.
//!
//! Most results are VarString in the session charset whose width follows the
//! (converted) string arguments. A binary string argument makes the result
//! binary, see [`set_bin_flag_or_bin_str`].

use crate::binder::errors::BindError;
use crate::infer::functions::{
    Registry, all_args, blob_result, define, int_result, string_result,
};
use crate::infer::{CallCtx, set_bin_flag_or_bin_str};
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::type_code::EvalType;

use EvalType::{Int, Real, String as Str};

/// Bytes per character assumed by HEX and UNHEX for character strings.
const HEX_BYTES_PER_CHAR: u32 = 3;

const NUMBER_TO_STRING_WIDTH: u32 = 64;

pub(crate) fn register(registry: &mut Registry) {
    define(registry, &["strcmp"], 2, Some(2), |ctx| {
        Ok(int_result(ctx, 2, &[Str, Str]))
    });
    define(registry, &["space"], 1, Some(1), |ctx| {
        ctx.wrap(0, Int);
        Ok(blob_result(ctx))
    });
    define(registry, &["concat"], 1, None, concat);
    define(registry, &["concat_ws"], 2, None, concat_ws);

    define(registry, &["left", "right"], 2, Some(2), |ctx| {
        Ok(first_arg_width(ctx, &[Str, Int]))
    });
    define(registry, &["lower", "lcase", "upper", "ucase", "reverse", "ltrim", "rtrim"], 1, Some(1), |ctx| {
        Ok(first_arg_width(ctx, &[Str]))
    });
    define(registry, &["trim"], 1, Some(3), |ctx| {
        Ok(first_arg_width(ctx, &[Str, Str, Int]))
    });
    define(registry, &["substr", "substring", "mid"], 2, Some(3), |ctx| {
        Ok(first_arg_width(ctx, &[Str, Int, Int]))
    });
    define(registry, &["substring_index"], 3, Some(3), |ctx| {
        Ok(first_arg_width(ctx, &[Str, Str, Int]))
    });
    define(registry, &["replace"], 3, Some(3), |ctx| {
        Ok(first_arg_width(ctx, &[Str, Str, Str]))
    });
    define(registry, &["repeat"], 2, Some(2), repeat);

    define(registry, &["to_base64"], 1, Some(1), to_base64);
    define(registry, &["from_base64"], 1, Some(1), |ctx| {
        ctx.wrap(0, Str);
        Ok(blob_result(ctx).binary())
    });
    define(registry, &["hex"], 1, Some(1), hex);
    define(registry, &["unhex"], 1, Some(1), unhex);
    define(registry, &["uuid"], 0, Some(0), |ctx| Ok(string_result(ctx, 36, &[])));

    define(registry, &["bit_length", "length", "octet_length"], 1, Some(1), |ctx| {
        Ok(int_result(ctx, 10, &[Str]))
    });
    define(registry, &["char_length", "character_length"], 1, Some(1), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Str]))
    });
    define(registry, &["ascii"], 1, Some(1), |ctx| Ok(int_result(ctx, 3, &[Str])));
    define(registry, &["ord"], 1, Some(1), |ctx| Ok(int_result(ctx, 10, &[Str])));
    define(registry, &["locate"], 2, Some(3), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Str, Str, Int]))
    });
    define(registry, &["instr"], 2, Some(2), |ctx| Ok(int_result(ctx, 11, &[Str, Str])));
    define(registry, &["find_in_set"], 2, Some(2), |ctx| {
        Ok(int_result(ctx, 3, &[Str, Str]))
    });
    define(registry, &["field"], 1, None, field);

    define(registry, &["elt"], 2, None, elt);
    define(registry, &["lpad", "rpad"], 3, Some(3), pad);
    define(registry, &["bin", "oct"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, NUMBER_TO_STRING_WIDTH, &[Int]))
    });
    define(registry, &["conv"], 3, Some(3), |ctx| {
        Ok(string_result(ctx, NUMBER_TO_STRING_WIDTH, &[Str, Int, Int]))
    });
    define(registry, &["char"], 1, None, char_fn);
    define(registry, &["make_set"], 2, None, make_set);
    define(registry, &["quote"], 1, Some(1), quote);
    define(registry, &["insert"], 4, Some(4), insert);
    define(registry, &["export_set"], 3, Some(5), |ctx| {
        ctx.builtin(Str, &[Int, Str, Str, Str, Int]);
        Ok(blob_result(ctx))
    });
    define(registry, &["format"], 2, Some(3), |ctx| {
        let number = if ctx.arg_ty(0).eval_type() == EvalType::Decimal {
            EvalType::Decimal
        } else {
            Real
        };
        ctx.builtin(Str, &[number, Int, Str]);
        Ok(blob_result(ctx))
    });
}

fn first_arg_width(ctx: &mut CallCtx, arg_tps: &[EvalType]) -> FieldType {
    let mut ty = ctx.builtin(Str, arg_tps);
    ty.flen = ctx.arg_ty(0).flen;
    set_bin_flag_or_bin_str(ctx.arg_ty(0), &mut ty);
    ty
}

fn sum_widths<'a>(tys: impl Iterator<Item = &'a FieldType>) -> Option<u32> {
    tys.map(|t| t.flen).sum::<Option<u32>>()
}

fn concat(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let arg_tps = all_args(ctx, Str);
    let mut ty = ctx.builtin(Str, &arg_tps);
    for arg in &ctx.args {
        set_bin_flag_or_bin_str(&arg.ty, &mut ty);
    }
    ty.flen = sum_widths(ctx.args.iter().map(|a| &a.ty)).map(|w| w.min(MAX_BLOB_WIDTH));
    Ok(ty)
}

fn concat_ws(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let arg_tps = all_args(ctx, Str);
    let mut ty = ctx.builtin(Str, &arg_tps);
    for arg in &ctx.args {
        set_bin_flag_or_bin_str(&arg.ty, &mut ty);
    }
    let separators = (ctx.arg_count() - 2) as u32;
    let parts = sum_widths(ctx.args[1..].iter().map(|a| &a.ty));
    ty.flen = match (ctx.arg_ty(0).flen, parts) {
        (Some(sep), Some(parts)) => Some((sep * separators + parts).min(MAX_BLOB_WIDTH)),
        _ => None,
    };
    Ok(ty)
}

fn repeat(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = ctx.builtin(Str, &[Str, Int]);
    set_bin_flag_or_bin_str(ctx.arg_ty(0), &mut ty);
    let count = ctx.constant(1).and_then(|v| v.as_i64());
    ty.flen = match (ctx.arg_ty(0).flen, count) {
        (Some(w), Some(n)) => {
            let n = u64::try_from(n).unwrap_or(0);
            Some((u64::from(w) * n).min(u64::from(MAX_BLOB_WIDTH)) as u32)
        }
        _ => Some(MAX_BLOB_WIDTH),
    };
    Ok(ty)
}

/// Encoded length including the newline inserted every 76 output bytes.
fn base64_len(n: u32) -> u32 {
    let len = n.div_ceil(3) * 4;
    if len == 0 { 0 } else { len + (len - 1) / 76 }
}

fn to_base64(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = ctx.builtin(Str, &[Str]);
    ty.flen = ctx.arg_ty(0).flen.map(base64_len);
    Ok(ty)
}

// Character strings count three bytes per character.
fn byte_width(ty: &FieldType) -> Option<u32> {
    let per_char = if ty.is_non_binary_str() { HEX_BYTES_PER_CHAR } else { 1 };
    ty.flen.map(|f| f * per_char)
}

fn hex(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let numeric = matches!(
        ctx.arg_ty(0).eval_type(),
        EvalType::Int | EvalType::Real | EvalType::Decimal
    );
    if numeric {
        let mut ty = ctx.builtin(Str, &[Int]);
        ty.flen = ctx.arg_ty(0).flen.map(|f| f * 2);
        return Ok(ty);
    }
    let mut ty = ctx.builtin(Str, &[Str]);
    ty.flen = byte_width(ctx.arg_ty(0)).map(|f| f * 2);
    Ok(ty)
}

fn unhex(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let width = byte_width(ctx.orig_ty(0));
    let mut ty = ctx.builtin(Str, &[Str]).binary();
    ty.flen = width.map(|w| w.div_ceil(2));
    Ok(ty)
}

// FIELD compares as integers, doubles or strings, whichever fits all arguments.
fn field(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let evals: Vec<EvalType> = ctx.args.iter().map(|a| a.ty.eval_type()).collect();
    let cmp = if evals.iter().all(|e| *e == Int) {
        Int
    } else if evals
        .iter()
        .all(|e| matches!(e, Int | Real | EvalType::Decimal))
    {
        Real
    } else {
        Str
    };
    let arg_tps = all_args(ctx, cmp);
    Ok(int_result(ctx, MAX_INT_WIDTH, &arg_tps))
}

fn elt(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut arg_tps = all_args(ctx, Str);
    arg_tps[0] = Int;
    let mut ty = ctx.builtin(Str, &arg_tps);
    let mut flen = Some(0u32);
    for arg in &ctx.args[1..] {
        set_bin_flag_or_bin_str(&arg.ty, &mut ty);
        flen = match (flen, arg.ty.flen) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
    }
    ty.flen = flen;
    Ok(ty)
}

fn pad(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = ctx.builtin(Str, &[Str, Int, Str]);
    let binary = ctx.arg_ty(0).is_binary_str() || ctx.arg_ty(2).is_binary_str();
    if binary {
        ty.set_binary_charset();
    }

    let length = ctx.constant(1).and_then(|v| v.as_i64());
    ty.flen = match length {
        Some(n) => {
            let per_char = if binary { 1 } else { MAX_BYTES_PER_CHAR };
            let n = u64::try_from(n).unwrap_or(0);
            Some((n * u64::from(per_char)).min(u64::from(MAX_BLOB_WIDTH)) as u32)
        }
        None => Some(MAX_BLOB_WIDTH),
    };
    Ok(ty)
}

// CHAR(n, ...) always produces bytes.
fn char_fn(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let arg_tps = all_args(ctx, Int);
    let flen = ctx.arg_count() as u32 * MAX_BYTES_PER_CHAR;
    Ok(ctx.builtin(Str, &arg_tps).binary().with_flen(Some(flen)))
}

fn make_set(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = FieldType::for_eval_type(Str, ctx.charset());
    for i in 0..ctx.arg_count() {
        set_bin_flag_or_bin_str(ctx.orig_ty(i), &mut ty);
    }

    let mut arg_tps = all_args(ctx, Str);
    arg_tps[0] = Int;
    ctx.builtin(Str, &arg_tps);

    let commas = (ctx.arg_count() - 2) as u32;
    ty.flen = sum_widths(ctx.args[1..].iter().map(|a| &a.ty))
        .map(|w| (w + commas).min(MAX_BLOB_WIDTH));
    Ok(ty)
}

// Two quotes plus every character possibly escaped.
fn quote(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = ctx.builtin(Str, &[Str]);
    set_bin_flag_or_bin_str(ctx.arg_ty(0), &mut ty);
    ty.flen = ctx
        .arg_ty(0)
        .flen
        .map(|f| (2 * f + 2).min(MAX_BLOB_WIDTH));
    Ok(ty)
}

fn insert(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    ctx.builtin(Str, &[Str, Int, Int, Str]);
    let mut ty = blob_result(ctx);
    if ctx.arg_ty(0).is_binary_str() || ctx.arg_ty(3).is_binary_str() {
        ty.set_binary_charset();
    }
    Ok(ty)
}
