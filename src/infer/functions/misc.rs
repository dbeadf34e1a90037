//! Miscellaneous functions: network addresses, locks, ANY_VALUE and friends.

use crate::binder::errors::BindError;
use crate::infer::CallCtx;
use crate::infer::functions::{Registry, define, define_noop, int_result, string_result};
use crate::types::charset::Charset;
use crate::types::consts::MAX_INT_WIDTH;
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::EvalType::{self, Int, Real, String as Str};

const INET_ATON_WIDTH: u32 = 21;
const INET_NTOA_WIDTH: u32 = 93;
const INET6_ATON_WIDTH: u32 = 16;
const INET6_NTOA_WIDTH: u32 = 117;

pub(crate) fn register(registry: &mut Registry) {
    define(registry, &["isnull"], 1, Some(1), |_| Ok(FieldType::boolean()));
    define(registry, &["sleep"], 1, Some(1), |ctx| Ok(int_result(ctx, 21, &[Real])));
    define(registry, &["bit_count"], 1, Some(1), |ctx| Ok(int_result(ctx, 2, &[Int])));
    define(registry, &["interval"], 2, None, interval);
    define(registry, &["any_value"], 1, Some(1), any_value);

    define(registry, &["inet_aton"], 1, Some(1), |ctx| {
        let mut ty = int_result(ctx, INET_ATON_WIDTH, &[Str]);
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
        Ok(ty)
    });
    define(registry, &["inet_ntoa"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, INET_NTOA_WIDTH, &[Int]).with_decimal(Some(0)))
    });
    define(registry, &["inet6_aton"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, INET6_ATON_WIDTH, &[Str])
            .with_decimal(Some(0))
            .binary())
    });
    define(registry, &["inet6_ntoa"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, INET6_NTOA_WIDTH, &[Str]).with_decimal(Some(0)))
    });
    define(
        registry,
        &["is_ipv4", "is_ipv4_compat", "is_ipv4_mapped", "is_ipv6"],
        1,
        Some(1),
        |ctx| Ok(int_result(ctx, 1, &[Str])),
    );

    define_noop(registry, &["get_lock"], 2, Some(2), |ctx| {
        Ok(int_result(ctx, 1, &[Str, Int]))
    });
    define_noop(registry, &["release_lock"], 1, Some(1), |ctx| {
        Ok(int_result(ctx, 1, &[Str]))
    });
}

/// `INTERVAL(n, n1, n2, ...)` compares as integers only when every argument is one.
fn interval(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let all_int = ctx.args.iter().all(|a| a.ty.eval_type() == Int);
    let eval = if all_int { Int } else { Real };
    let arg_tps = vec![eval; ctx.arg_count()];
    Ok(int_result(ctx, MAX_INT_WIDTH, &arg_tps))
}

fn any_value(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let mut ty = ctx.arg_ty(0).clone();
    match ty.eval_type() {
        EvalType::String => ty.decimal = None,
        EvalType::Datetime | EvalType::Timestamp => {
            ty.set_charset(Charset::Utf8mb4);
            ty.flags.remove(FieldTypeFlag::BINARY);
        }
        _ => ty.flags.insert(FieldTypeFlag::BINARY),
    }
    Ok(ty)
}
