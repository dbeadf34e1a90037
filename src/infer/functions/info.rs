//! Session and server information functions.

use crate::infer::functions::{Registry, define, int_result, string_result};
use crate::types::consts::MAX_INT_WIDTH;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::EvalType::{Int, String as Str};

const NAME_WIDTH: u32 = 64;

pub(crate) fn register(registry: &mut Registry) {
    define(
        registry,
        &["database", "schema", "user", "current_user", "session_user", "system_user", "version"],
        0,
        Some(0),
        |ctx| Ok(string_result(ctx, NAME_WIDTH, &[])),
    );
    define(registry, &["charset", "collation"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, NAME_WIDTH, &[Str]))
    });
    define(registry, &["found_rows", "connection_id"], 0, Some(0), |ctx| {
        let mut ty = int_result(ctx, MAX_INT_WIDTH, &[]);
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
        Ok(ty)
    });
    define(registry, &["last_insert_id"], 0, Some(1), |ctx| {
        let mut ty = int_result(ctx, MAX_INT_WIDTH, &[Int]);
        ty.flags.insert(FieldTypeFlag::UNSIGNED);
        Ok(ty)
    });
    define(registry, &["row_count", "tidb_is_ddl_owner"], 0, Some(0), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[]))
    });
    define(registry, &["coercibility"], 1, Some(1), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[]))
    });
    // the expression argument is evaluated as is
    define(registry, &["benchmark"], 2, Some(2), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Int]))
    });
}
