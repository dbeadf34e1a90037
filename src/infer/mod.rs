//! Static type inference for bound expressions.
//!
//! The binder builds the tree bottom-up and asks this module for the
//! descriptor of every node it creates. Resolvers may also replace arguments
//! with implicit casts (see [`wrap`]).

pub mod aggregate;
pub mod cast;
pub mod coercion;
pub mod control;
pub mod functions;
pub mod literal;
pub mod wrap;


use crate::binder::bound::BoundExpr;
use crate::config::SessionConfig;
use crate::types::charset::Charset;
use crate::types::consts::{MAX_BLOB_WIDTH, MEDIUM_BLOB_THRESHOLD};
use crate::types::field_type::FieldType;
use crate::types::flags::FieldTypeFlag;
use crate::types::type_code::{EvalType, FieldTypeTp};
use crate::types::value::Value;

pub struct CallCtx<'a> {
    pub name: &'static str,
    pub args: Vec<BoundExpr>,
    pub config: &'a SessionConfig,
    original: Vec<FieldType>,
}

impl<'a> CallCtx<'a> {
    pub fn new(name: &'static str, args: Vec<BoundExpr>, config: &'a SessionConfig) -> Self {
        let original = args.iter().map(|a| a.ty.clone()).collect();
        Self {
            name,
            args,
            config,
            original,
        }
    }

    pub fn charset(&self) -> Charset {
        self.config.charset
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn arg(&self, i: usize) -> &BoundExpr {
        &self.args[i]
    }

    pub fn arg_ty(&self, i: usize) -> &FieldType {
        &self.args[i].ty
    }

    pub fn orig_ty(&self, i: usize) -> &FieldType {
        &self.original[i]
    }

    pub fn constant(&self, i: usize) -> Option<Value> {
        self.args.get(i).and_then(BoundExpr::constant)
    }

    pub fn wrap(&mut self, i: usize, eval: EvalType) {
        let charset = self.charset();
        if let Some(arg) = self.args.get_mut(i) {
            wrap::to_eval(arg, eval, charset);
        }
    }

    pub fn wrap_all(&mut self, eval: EvalType) {
        for i in 0..self.args.len() {
            self.wrap(i, eval);
        }
    }

    pub fn builtin(&mut self, ret: EvalType, arg_tps: &[EvalType]) -> FieldType {
        for (i, eval) in arg_tps.iter().enumerate() {
            self.wrap(i, *eval);
        }
        FieldType::for_eval_type(ret, self.charset())
    }

    pub fn arg_type_names(&self) -> Vec<String> {
        self.args.iter().map(|a| a.ty.tp.name().to_string()).collect()
    }
}

pub fn finish_string_result(ty: &mut FieldType) {
    if ty.eval_type() != EvalType::String {
        return;
    }
    match ty.flen {
        Some(f) if f >= MAX_BLOB_WIDTH => ty.tp = FieldTypeTp::LongBlob,
        Some(f) if f >= MEDIUM_BLOB_THRESHOLD => ty.tp = FieldTypeTp::MediumBlob,
        _ => {}
    }
}

/// Propagates binary-ness of a string argument into a string result.
///
/// A binary string argument makes the whole result binary; otherwise the
/// result only picks up the BINARY flag.
pub fn set_bin_flag_or_bin_str(arg: &FieldType, res: &mut FieldType) {
    if arg.is_binary_str() {
        res.set_binary_charset();
    } else if arg.has_binary_flag() || !arg.is_non_binary_str() {
        res.flags.insert(FieldTypeFlag::BINARY);
    }
}

pub fn numeric_context(ty: &FieldType) -> EvalType {
    match ty.tp {
        FieldTypeTp::Date | FieldTypeTp::Datetime | FieldTypeTp::Timestamp | FieldTypeTp::Duration => {
            if ty.decimal.is_some_and(|d| d > 0) {
                EvalType::Decimal
            } else {
                EvalType::Int
            }
        }
        FieldTypeTp::Bit => EvalType::Int,
        FieldTypeTp::Set | FieldTypeTp::Enum => EvalType::Real,
        _ => match ty.eval_type() {
            EvalType::Int => EvalType::Int,
            EvalType::Decimal => EvalType::Decimal,
            _ => EvalType::Real,
        },
    }
}

pub fn default_flags(eval: EvalType) -> FieldTypeFlag {
    if eval == EvalType::String {
        FieldTypeFlag::EMPTY
    } else {
        FieldTypeFlag::BINARY
    }
}
