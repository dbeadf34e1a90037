//! Merging of base types across the branches of IF / CASE / COALESCE.

use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};

fn blob_rank(tp: FieldTypeTp) -> u8 {
    match tp {
        FieldTypeTp::TinyBlob => 1,
        FieldTypeTp::Blob => 2,
        FieldTypeTp::MediumBlob => 3,
        FieldTypeTp::LongBlob => 4,
        _ => 0,
    }
}

fn int_rank(tp: FieldTypeTp) -> u8 {
    match tp {
        FieldTypeTp::Tiny => 1,
        FieldTypeTp::Short => 2,
        FieldTypeTp::Int24 => 3,
        FieldTypeTp::Long => 4,
        FieldTypeTp::Longlong => 5,
        _ => 0,
    }
}

fn is_numeric(tp: FieldTypeTp) -> bool {
    tp.is_integer()
        || matches!(
            tp,
            FieldTypeTp::Float | FieldTypeTp::Double | FieldTypeTp::NewDecimal
        )
}

pub fn merge_field_type(a: FieldTypeTp, b: FieldTypeTp) -> FieldTypeTp {
    use FieldTypeTp::*;

    if a == Null {
        return b;
    }
    if b == Null {
        return a;
    }
    if a == b {
        return match a {
            Set | Enum => Varchar,
            _ => a,
        };
    }

    if a == Json || b == Json {
        return LongBlob;
    }
    if a.is_blob() || b.is_blob() {
        return if blob_rank(a) >= blob_rank(b) { a } else { b };
    }
    if a.is_varchar() || b.is_varchar() {
        return Varchar;
    }
    if a == String || b == String {
        return String;
    }
    if matches!(a, Set | Enum) || matches!(b, Set | Enum) {
        return Varchar;
    }

    merge_scalar(a, b)
}

fn merge_scalar(a: FieldTypeTp, b: FieldTypeTp) -> FieldTypeTp {
    use FieldTypeTp::*;

    match (a, b) {
        // ---------- temporal ----------
        (x, y) if x.is_temporal() && y.is_temporal() => Datetime,
        (x, _) | (_, x) if x.is_temporal() => Varchar,

        // ---------- year / bit ----------
        (Year, other) | (other, Year) if is_numeric(other) => other,
        (Bit, other) | (other, Bit) if other.is_integer() => Longlong,
        (Bit, Float | Double) | (Float | Double, Bit) => Double,
        (Bit, NewDecimal) | (NewDecimal, Bit) => NewDecimal,
        (Bit, _) | (_, Bit) | (Year, _) | (_, Year) => Varchar,

        // ---------- numeric ----------
        (Double, _) | (_, Double) => Double,
        (Float, NewDecimal) | (NewDecimal, Float) => Double,
        (Float, other) | (other, Float) => {
            if int_rank(other) <= int_rank(Int24) {
                Float
            } else {
                Double
            }
        }
        (NewDecimal, _) | (_, NewDecimal) => NewDecimal,
        (x, y) => {
            if int_rank(x) >= int_rank(y) {
                x
            } else {
                y
            }
        }
    }
}

pub fn agg_field_type(tps: &[&FieldType]) -> FieldType {
    let mut iter = tps.iter();
    let mut current = match iter.next() {
        Some(first) => (*first).clone(),
        None => FieldType::new(FieldTypeTp::Null),
    };
    for tp in iter {
        current.tp = merge_field_type(current.tp, tp.tp);
    }
    current
}

fn merge_eval_type(lhs: EvalType, rhs: EvalType, lhs_unsigned: bool, rhs_unsigned: bool) -> EvalType {
    if lhs.is_string_kind() || rhs.is_string_kind() {
        EvalType::String
    } else if lhs == EvalType::Real || rhs == EvalType::Real {
        EvalType::Real
    } else if lhs == EvalType::Decimal || rhs == EvalType::Decimal || lhs_unsigned != rhs_unsigned {
        EvalType::Decimal
    } else {
        EvalType::Int
    }
}

/// The evaluation class shared by `tps`, NULL arguments ignored.
///
/// Rewrites UNSIGNED and BINARY on `flags` to match the aggregate.
pub fn aggregate_eval_type(tps: &[&FieldType], flags: &mut FieldTypeFlag) -> EvalType {
    let mut aggregated = EvalType::String;
    let mut unsigned = false;
    let mut got_first = false;
    let mut got_bin_string = false;

    for tp in tps.iter().filter(|tp| tp.tp != FieldTypeTp::Null) {
        if (tp.tp.is_blob() || tp.tp.is_varchar() || tp.tp.is_char()) && tp.has_binary_flag() {
            got_bin_string = true;
        }
        if !got_first {
            got_first = true;
            aggregated = tp.eval_type();
            unsigned = tp.is_unsigned();
        } else {
            aggregated =
                merge_eval_type(aggregated, tp.eval_type(), unsigned, tp.is_unsigned());
            unsigned = unsigned && tp.is_unsigned();
        }
    }

    flags.set(FieldTypeFlag::UNSIGNED, unsigned);
    flags.set(
        FieldTypeFlag::BINARY,
        !aggregated.is_string_kind() || got_bin_string,
    );
    aggregated
}
