//! Date and time functions.

use std::collections::HashMap;
use std::sync::LazyLock;

use maplit::hashmap;

use crate::binder::bound::BoundExpr;
use crate::binder::errors::BindError;
use crate::infer::CallCtx;
use crate::infer::functions::{Registry, define, int_result, string_result};
use crate::infer::literal::{literal_fsp, with_fsp};
use crate::types::charset::Charset;
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::type_code::{EvalType, FieldTypeTp};
use crate::types::value::Value;

use EvalType::{Datetime, Decimal, Duration, Int, Real, String as Str};

static SPECIFIER_WIDTH: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    hashmap! {
        'a' => 3, 'b' => 3, 'c' => 2, 'D' => 4, 'd' => 2, 'e' => 2, 'f' => 6,
        'H' => 2, 'h' => 2, 'I' => 2, 'i' => 2, 'j' => 3, 'k' => 2, 'l' => 2,
        'M' => 9, 'm' => 2, 'p' => 2, 'r' => 11, 'S' => 2, 's' => 2, 'T' => 8,
        'U' => 2, 'u' => 2, 'V' => 2, 'v' => 2, 'W' => 9, 'w' => 1, 'X' => 4,
        'x' => 4, 'Y' => 4, 'y' => 2, '%' => 1,
    }
});

const DATE_SPECIFIERS: &str = "YymcdeDjMbaWUuVvXxw";
const TIME_SPECIFIERS: &str = "HhIiklSsfprT";

const DURATION_PARTS: [(&str, u32); 5] = [
    ("hour", 3),
    ("minute", 2),
    ("second", 2),
    ("microsecond", 6),
    ("time_to_sec", 10),
];
const DATE_PARTS: [(&str, u32); 11] = [
    ("day", 2),
    ("dayofmonth", 2),
    ("dayofyear", 3),
    ("dayofweek", 1),
    ("weekday", 1),
    ("weekofyear", 2),
    ("year", 4),
    ("month", 2),
    ("quarter", 1),
    ("to_days", 20),
    ("to_seconds", 20),
];

const NAME_WIDTH: u32 = 10;
const GET_FORMAT_WIDTH: u32 = 17;
const UNIX_TIMESTAMP_WIDTH: u32 = 11;
const UTC_TIME_WIDTH: u32 = 8;

pub(crate) fn register(registry: &mut Registry) {
    for (name, _) in DURATION_PARTS.iter().chain(DATE_PARTS.iter()) {
        define(registry, &[*name], 1, Some(1), component);
    }
    define(registry, &["week", "yearweek"], 1, Some(2), |ctx| {
        let flen = if ctx.name == "week" { 2 } else { 6 };
        Ok(int_result(ctx, flen, &[Datetime, Int]))
    });
    define(registry, &["period_add", "period_diff"], 2, Some(2), |ctx| {
        Ok(int_result(ctx, 6, &[Int, Int]))
    });
    define(registry, &["datediff"], 2, Some(2), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Datetime, Datetime]))
    });
    define(registry, &["timestampdiff"], 3, Some(3), |ctx| {
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Str, Datetime, Datetime]))
    });
    define(registry, &["extract"], 2, Some(2), |ctx| {
        let from = if ctx.arg_ty(1).tp == FieldTypeTp::Duration {
            Duration
        } else {
            Datetime
        };
        Ok(int_result(ctx, MAX_INT_WIDTH, &[Str, from]))
    });
    define(registry, &["unix_timestamp"], 0, Some(1), unix_timestamp);

    define(registry, &["date_format"], 2, Some(2), |ctx| format_fn(ctx, Datetime));
    define(registry, &["time_format"], 2, Some(2), |ctx| format_fn(ctx, Duration));
    define(registry, &["monthname", "dayname"], 1, Some(1), |ctx| {
        Ok(string_result(ctx, NAME_WIDTH, &[Datetime]))
    });
    define(registry, &["get_format"], 2, Some(2), |ctx| {
        Ok(string_result(ctx, GET_FORMAT_WIDTH, &[Str, Str]))
    });
    define(registry, &["timestampadd"], 3, Some(3), |ctx| {
        ctx.builtin(Str, &[Str, Real, Datetime]);
        Ok(temporal_string(MAX_DATETIME_WIDTH_NO_FSP))
    });
    define(registry, &["addtime", "subtime"], 2, Some(2), add_time);

    define(registry, &["date", "last_day"], 1, Some(1), |ctx| {
        ctx.builtin(Datetime, &[Datetime]);
        Ok(date_type())
    });
    define(registry, &["makedate"], 2, Some(2), |ctx| {
        ctx.builtin(Datetime, &[Int, Int]);
        Ok(date_type())
    });
    define(registry, &["timestamp"], 1, Some(2), timestamp);
    define(registry, &["str_to_date"], 2, Some(2), str_to_date);
    define(registry, &["convert_tz"], 3, Some(3), |ctx| {
        Ok(ctx.builtin(Datetime, &[Datetime, Str, Str]))
    });
    define(registry, &["from_unixtime"], 1, Some(2), from_unixtime);

    define(
        registry,
        &["now", "current_timestamp", "localtime", "localtimestamp", "utc_timestamp"],
        0,
        Some(1),
        |ctx| {
            let fsp = requested_fsp(ctx);
            ctx.builtin(Datetime, &[Int]);
            Ok(datetime_type(fsp))
        },
    );
    define(registry, &["sysdate"], 0, Some(1), |ctx| {
        ctx.builtin(Datetime, &[Int]);
        Ok(datetime_type(0))
    });
    define(registry, &["curdate", "current_date", "utc_date"], 0, Some(0), |_| {
        Ok(FieldType::new(FieldTypeTp::Datetime)
            .with_width(MAX_DATE_WIDTH, 0)
            .binary())
    });
    define(registry, &["from_days"], 1, Some(1), |ctx| {
        ctx.builtin(Datetime, &[Int]);
        Ok(FieldType::new(FieldTypeTp::Datetime)
            .with_width(MAX_DATE_WIDTH, 0)
            .binary())
    });
    define(registry, &["curtime", "current_time"], 0, Some(1), |ctx| {
        if ctx.arg_count() == 0 {
            return Ok(duration_type(MAX_DURATION_WIDTH_NO_FSP, 0));
        }
        let fsp = requested_fsp(ctx);
        ctx.builtin(Duration, &[Int]);
        Ok(duration_type(MAX_DURATION_WIDTH_WITH_FSP, fsp))
    });
    define(registry, &["utc_time"], 0, Some(1), |ctx| {
        let fsp = requested_fsp(ctx);
        ctx.builtin(Duration, &[Int]);
        Ok(duration_type(with_fsp(UTC_TIME_WIDTH, fsp), fsp))
    });
    define(registry, &["sec_to_time"], 1, Some(1), |ctx| {
        let fsp = expression_fsp(ctx.arg(0));
        ctx.builtin(Duration, &[Real]);
        Ok(duration_type(with_fsp(MAX_DURATION_WIDTH_NO_FSP, fsp), fsp))
    });
    define(registry, &["maketime"], 3, Some(3), |ctx| {
        let fsp = expression_fsp(ctx.arg(2));
        ctx.builtin(Duration, &[Int, Int, Real]);
        Ok(duration_type(with_fsp(MAX_DURATION_WIDTH_NO_FSP, fsp), fsp))
    });
}

pub fn expression_fsp(expr: &BoundExpr) -> u32 {
    match expr.constant() {
        Some(Value::Null) => return 0,
        Some(Value::String { text, .. }) => return literal_fsp(&text),
        _ => {}
    }
    let ty = &expr.ty;
    if ty.tp == FieldTypeTp::Null {
        return 0;
    }
    match ty.eval_type() {
        EvalType::Int => 0,
        EvalType::String => MAX_FSP,
        _ => ty.decimal.map_or(MAX_FSP, |d| d.min(MAX_FSP)),
    }
}

pub fn format_width(format: &str) -> u32 {
    let mut width = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            width += 1;
            continue;
        }
        width += match chars.next() {
            Some(spec) => SPECIFIER_WIDTH.get(&spec).copied().unwrap_or(1),
            None => 1,
        };
    }
    width
}

fn constant_text(ctx: &CallCtx, i: usize) -> Option<String> {
    ctx.constant(i).and_then(|v| v.as_str().map(str::to_string))
}

fn formatted_width(ctx: &CallCtx, fmt: usize) -> Option<u32> {
    match constant_text(ctx, fmt) {
        Some(format) => Some(format_width(&format)),
        None => ctx.arg_ty(fmt).flen.map(|f| f.div_ceil(2) * 11),
    }
}

fn format_fn(ctx: &mut CallCtx, value: EvalType) -> Result<FieldType, BindError> {
    let flen = formatted_width(ctx, 1);
    Ok(ctx.builtin(Str, &[value, Str]).with_flen(flen))
}

fn component(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    if let Some((_, flen)) = DURATION_PARTS.iter().find(|(n, _)| *n == ctx.name) {
        return Ok(int_result(ctx, *flen, &[Duration]));
    }
    let flen = DATE_PARTS
        .iter()
        .find(|(n, _)| *n == ctx.name)
        .map_or(MAX_INT_WIDTH, |(_, f)| *f);
    Ok(int_result(ctx, flen, &[Datetime]))
}

fn requested_fsp(ctx: &CallCtx) -> u32 {
    if ctx.arg_count() == 0 {
        return 0;
    }
    match ctx.constant(0).and_then(|v| v.as_i64()) {
        Some(n) => n.clamp(0, i64::from(MAX_FSP)) as u32,
        None => MAX_FSP,
    }
}

fn date_type() -> FieldType {
    FieldType::new(FieldTypeTp::Date)
        .with_width(MAX_DATE_WIDTH, 0)
        .binary()
}

fn datetime_type(fsp: u32) -> FieldType {
    FieldType::new(FieldTypeTp::Datetime)
        .with_width(with_fsp(MAX_DATETIME_WIDTH_NO_FSP, fsp), fsp)
        .binary()
}

fn duration_type(flen: u32, fsp: u32) -> FieldType {
    FieldType::new(FieldTypeTp::Duration)
        .with_width(flen, fsp)
        .binary()
}

fn temporal_string(flen: u32) -> FieldType {
    FieldType::new(FieldTypeTp::String)
        .with_charset(Charset::Utf8mb4)
        .with_flen(Some(flen))
}

fn unix_timestamp(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    if ctx.arg_count() == 0 {
        return Ok(int_result(ctx, UNIX_TIMESTAMP_WIDTH, &[]));
    }
    let fsp = expression_fsp(ctx.arg(0));
    if fsp == 0 {
        return Ok(int_result(ctx, UNIX_TIMESTAMP_WIDTH, &[Datetime]));
    }
    Ok(ctx
        .builtin(Decimal, &[Datetime])
        .with_width(UNIX_TIMESTAMP_WIDTH + 1 + fsp, fsp))
}

fn add_time(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let lhs = ctx.arg_ty(0).clone();
    let rhs = ctx.arg_ty(1).clone();
    match lhs.tp {
        FieldTypeTp::Datetime | FieldTypeTp::Timestamp => {
            ctx.builtin(Datetime, &[Datetime, Duration]);
            Ok(FieldType::new(FieldTypeTp::Datetime)
                .with_flen(Some(MAX_DATETIME_WIDTH_WITH_FSP))
                .with_decimal(lhs.decimal)
                .binary())
        }
        FieldTypeTp::Duration => {
            ctx.builtin(Duration, &[Duration, Duration]);
            let fsp = lhs.decimal_or_neg().max(rhs.decimal_or_neg());
            Ok(FieldType::new(FieldTypeTp::Duration)
                .with_flen(Some(MAX_DURATION_WIDTH_WITH_FSP))
                .with_decimal(u32::try_from(fsp).ok())
                .binary())
        }
        _ => {
            ctx.builtin(Str, &[Str, Str]);
            Ok(temporal_string(MAX_DATETIME_WIDTH_WITH_FSP))
        }
    }
}

fn timestamp(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let fsp = ctx
        .args
        .iter()
        .map(expression_fsp)
        .max()
        .unwrap_or(0);
    ctx.builtin(Datetime, &[Datetime, Duration]);
    Ok(FieldType::new(FieldTypeTp::Datetime)
        .with_flen(Some(with_fsp(MAX_DATETIME_WIDTH_NO_FSP, fsp)))
        .binary())
}

fn str_to_date(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    let format = constant_text(ctx, 1);
    ctx.builtin(Datetime, &[Str, Str]);
    let Some(format) = format else {
        return Ok(datetime_type(MAX_FSP));
    };

    let mut has_date = false;
    let mut has_time = false;
    let mut has_fraction = false;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        if let Some(spec) = chars.next() {
            has_date |= DATE_SPECIFIERS.contains(spec);
            has_time |= TIME_SPECIFIERS.contains(spec);
            has_fraction |= spec == 'f';
        }
    }
    let fsp = if has_fraction { MAX_FSP } else { 0 };

    let ty = match (has_date, has_time) {
        (true, false) => date_type(),
        (false, true) if has_fraction => duration_type(MAX_DURATION_WIDTH_WITH_FSP, fsp),
        (false, true) => duration_type(MAX_DURATION_WIDTH_NO_FSP, 0),
        _ => datetime_type(fsp),
    };
    Ok(ty)
}

fn from_unixtime(ctx: &mut CallCtx) -> Result<FieldType, BindError> {
    if ctx.arg_count() == 2 {
        let flen = formatted_width(ctx, 1);
        return Ok(ctx.builtin(Str, &[Decimal, Str]).with_flen(flen));
    }
    let arg = ctx.arg_ty(0).clone();
    let ty = match arg.eval_type() {
        EvalType::Int => datetime_type(0),
        EvalType::Decimal => FieldType::new(FieldTypeTp::Datetime)
            .with_flen(Some(MAX_DATETIME_WIDTH_WITH_FSP))
            .with_decimal(Some(arg.decimal.map_or(MAX_FSP, |d| d.min(MAX_FSP))))
            .binary(),
        _ => datetime_type(MAX_FSP),
    };
    ctx.wrap(0, Decimal);
    Ok(ty)
}
