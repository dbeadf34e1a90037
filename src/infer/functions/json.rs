//! JSON functions.

use crate::infer::functions::{Registry, define, int_result, string_result};
use crate::types::consts::*;
use crate::types::type_code::EvalType::{self, Json, String as Str};

const JSON_TYPE_WIDTH: u32 = 51;

pub(crate) fn register(registry: &mut Registry) {
    define(registry, &["json_type"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, JSON_TYPE_WIDTH, &[Json]))
    });
    define(registry, &["json_unquote"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, MAX_FIELD_VARCHAR_LENGTH, &[Str]))
    });
    define(registry, &["json_extract"], 2, None, |ctx| {
        let mut arg_tps = vec![Str; ctx.arg_count()];
        arg_tps[0] = Json;
        Ok(ctx.builtin(Json, &arg_tps))
    });
    // document, then (path, value) pairs
    define(
        registry,
        &["json_set", "json_insert", "json_replace"],
        3,
        None,
        |ctx| {
            let arg_tps = path_value_args(ctx.arg_count());
            Ok(ctx.builtin(Json, &arg_tps))
        },
    );
    define(registry, &["json_remove"], 2, None, |ctx| {
        let mut arg_tps = vec![Str; ctx.arg_count()];
        arg_tps[0] = Json;
        Ok(ctx.builtin(Json, &arg_tps))
    });
    define(
        registry,
        &["json_merge", "json_merge_preserve"],
        2,
        None,
        |ctx| {
            let arg_tps = vec![Json; ctx.arg_count()];
            Ok(ctx.builtin(Json, &arg_tps))
        },
    );
    define(registry, &["json_object"], 0, None, |ctx| {
        // keys are strings, values keep their own class
        let arg_tps: Vec<EvalType> = (0..ctx.arg_count())
            .map(|i| if i % 2 == 0 { Str } else { Json })
            .collect();
        Ok(ctx.builtin(Json, &arg_tps))
    });
    define(registry, &["json_array"], 0, None, |ctx| {
        let arg_tps = vec![Json; ctx.arg_count()];
        Ok(ctx.builtin(Json, &arg_tps))
    });
    define(registry, &["json_keys"], 1, Some(2), |ctx| {
        Ok(ctx.builtin(Json, &[Json, Str]))
    });
    define(registry, &["json_valid"], 1, Some(1), |ctx| {
        Ok(int_result(ctx, 1, &[Json]))
    });
    define(registry, &["json_contains"], 2, Some(3), |ctx| {
        Ok(int_result(ctx, 1, &[Json, Json, Str]))
    });
    define(registry, &["json_length", "json_depth"], 1, Some(2), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Json, Str]))
    });
}

fn path_value_args(count: usize) -> Vec<EvalType> {
    (0..count)
        .map(|i| match i {
            0 => Json,
            i if i % 2 == 1 => Str,
            _ => Json,
        })
        .collect()
}
