//! Result types of aggregate functions.

use crate::binder::bound::{AggregateFunc, BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::config::SessionConfig;
use crate::infer::wrap;
use crate::types::charset::Charset;
use crate::types::consts::*;
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};

const COUNT_WIDTH: u32 = 21;

pub fn aggregate(
    func: AggregateFunc,
    mut args: Vec<BoundExpr>,
    distinct: bool,
    config: &SessionConfig,
) -> Result<BoundExpr, BindError> {
    check_arity(func, &args)?;

    let ty = match func {
        AggregateFunc::Count => FieldType::new(FieldTypeTp::Longlong)
            .with_width(COUNT_WIDTH, 0)
            .binary(),
        AggregateFunc::Sum => sum_type(&mut args[0], config),
        AggregateFunc::Avg => avg_type(&mut args[0], config),
        AggregateFunc::Min | AggregateFunc::Max => min_max_type(&args[0].ty),
        AggregateFunc::GroupConcat => {
            for arg in args.iter_mut() {
                wrap::to_eval(arg, EvalType::String, config.charset);
            }
            FieldType::new(FieldTypeTp::VarString)
                .with_charset(Charset::Utf8mb4)
                .with_width(MAX_BLOB_WIDTH, 0)
        }
        AggregateFunc::BitAnd | AggregateFunc::BitOr | AggregateFunc::BitXor => {
            wrap::to_eval(&mut args[0], EvalType::Int, config.charset);
            FieldType::new(FieldTypeTp::Longlong)
                .with_width(COUNT_WIDTH, 0)
                .with_flags(FieldTypeFlag::UNSIGNED)
                .binary()
        }
        AggregateFunc::Statistic(_) => {
            wrap::to_eval(&mut args[0], EvalType::Real, config.charset);
            real_result(None)
        }
    };

    Ok(BoundExpr::new(
        BoundExprKind::Aggregate {
            func,
            args,
            distinct,
        },
        ty,
    ))
}

fn check_arity(func: AggregateFunc, args: &[BoundExpr]) -> Result<(), BindError> {
    let ok = match func {
        AggregateFunc::GroupConcat | AggregateFunc::Count => !args.is_empty(),
        _ => args.len() == 1,
    };
    if ok {
        return Ok(());
    }
    Err(BindError::SignatureNotFound {
        name: func.name().to_string(),
        arity: args.len(),
        arg_types: args.iter().map(|a| a.ty.tp.name().to_string()).collect(),
    })
}

fn real_result(decimal: Option<u32>) -> FieldType {
    FieldType::new(FieldTypeTp::Double)
        .with_flen(Some(MAX_REAL_WIDTH))
        .with_decimal(decimal)
        .binary()
}

fn decimal_result(scale: u32) -> FieldType {
    FieldType::new(FieldTypeTp::NewDecimal)
        .with_width(MAX_DECIMAL_WIDTH, scale.min(MAX_DECIMAL_SCALE))
        .binary()
}

fn sum_type(arg: &mut BoundExpr, config: &SessionConfig) -> FieldType {
    match arg.ty.tp {
        tp if tp.is_integer() => decimal_result(0),
        FieldTypeTp::NewDecimal => decimal_result(arg.ty.decimal.unwrap_or(MAX_DECIMAL_SCALE)),
        FieldTypeTp::Float | FieldTypeTp::Double => real_result(arg.ty.decimal),
        _ => {
            wrap::to_eval(arg, EvalType::Real, config.charset);
            real_result(None)
        }
    }
}

fn avg_type(arg: &mut BoundExpr, config: &SessionConfig) -> FieldType {
    let incr = config.div_precision_increment;
    match arg.ty.tp {
        tp if tp.is_integer() => decimal_result(incr),
        FieldTypeTp::NewDecimal => match arg.ty.decimal {
            Some(d) => decimal_result(d + incr),
            None => decimal_result(MAX_DECIMAL_SCALE),
        },
        FieldTypeTp::Float | FieldTypeTp::Double => real_result(arg.ty.decimal),
        _ => {
            wrap::to_eval(arg, EvalType::Real, config.charset);
            real_result(None)
        }
    }
}

// MIN / MAX return one of the input values.
fn min_max_type(arg: &FieldType) -> FieldType {
    let mut ty = arg.clone();
    if matches!(ty.tp, FieldTypeTp::Set | FieldTypeTp::Enum) {
        ty.tp = FieldTypeTp::String;
        ty.elems.clear();
    }
    if !ty.eval_type().is_string_kind() || ty.tp == FieldTypeTp::Null {
        ty.set_binary_charset();
    }
    ty
}
