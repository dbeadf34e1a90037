//! Builtin scalar functions.
//!
//! Every function is a [`FunctionDef`] in a registry keyed by lower-case
//! name. Resolving a call checks the arity, lets the function's resolver wrap
//! arguments and compute the result descriptor, and builds the bound node.

mod info;
mod json;
mod math;
mod misc;
mod string;
mod time;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::binder::bound::{BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::config::SessionConfig;
use crate::debugger::Component;
use crate::infer::{CallCtx, control, finish_string_result};
use crate::types::field_type::FieldType;
use crate::types::type_code::{EvalType, FieldTypeTp};
use crate::{db_debug, db_trace};

pub type Resolver = fn(&mut CallCtx) -> Result<FieldType, BindError>;

pub struct FunctionDef {
    pub name: &'static str,
    pub min_args: usize,
    /// `None` means variadic.
    pub max_args: Option<usize>,
    /// Accepted only while `tidb_enable_noop_functions` is on.
    pub noop: bool,
    pub resolve: Resolver,
}

impl FunctionDef {
    pub fn accepts(&self, arity: usize) -> bool {
        arity >= self.min_args && self.max_args.is_none_or(|max| arity <= max)
    }
}

pub(crate) type Registry = HashMap<&'static str, FunctionDef>;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut registry = Registry::new();
    register_control(&mut registry);
    string::register(&mut registry);
    math::register(&mut registry);
    time::register(&mut registry);
    json::register(&mut registry);
    info::register(&mut registry);
    misc::register(&mut registry);
    registry
});

pub(crate) fn define(
    registry: &mut Registry,
    names: &[&'static str],
    min_args: usize,
    max_args: Option<usize>,
    resolve: Resolver,
) {
    for &name in names {
        registry.insert(
            name,
            FunctionDef {
                name,
                min_args,
                max_args,
                noop: false,
                resolve,
            },
        );
    }
}

pub(crate) fn define_noop(
    registry: &mut Registry,
    names: &[&'static str],
    min_args: usize,
    max_args: Option<usize>,
    resolve: Resolver,
) {
    define(registry, names, min_args, max_args, resolve);
    for name in names {
        if let Some(def) = registry.get_mut(name) {
            def.noop = true;
        }
    }
}

fn register_control(registry: &mut Registry) {
    define(registry, &["if"], 3, Some(3), control::if_fn);
    define(registry, &["ifnull"], 2, Some(2), control::ifnull);
    define(registry, &["nullif"], 2, Some(2), control::nullif);
    define(registry, &["coalesce"], 1, None, control::coalesce);
    define(registry, &["greatest", "least"], 2, None, control::min_max);
}

pub fn lookup(name: &str) -> Option<&'static FunctionDef> {
    REGISTRY.get(name.to_ascii_lowercase().as_str())
}

pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn call(name: &str, args: Vec<BoundExpr>, config: &SessionConfig) -> Result<BoundExpr, BindError> {
    let def = lookup(name).ok_or_else(|| BindError::UnknownFunction(name.to_ascii_lowercase()))?;

    if !def.accepts(args.len()) {
        return Err(BindError::SignatureNotFound {
            name: def.name.to_string(),
            arity: args.len(),
            arg_types: args.iter().map(|a| a.ty.tp.name().to_string()).collect(),
        });
    }
    if def.noop && !config.enable_noop_functions {
        db_debug!(Component::Infer, "{} rejected: noop functions are disabled", def.name);
        return Err(BindError::NotImplemented(format!(
            "function {} has only noop implementation; set tidb_enable_noop_functions=1 to use it",
            def.name
        )));
    }

    let mut ctx = CallCtx::new(def.name, args, config);
    let mut ty = (def.resolve)(&mut ctx)?;
    finish_string_result(&mut ty);
    db_trace!(Component::Infer, "{}/{} -> {}", def.name, ctx.arg_count(), ty);

    Ok(BoundExpr::new(
        BoundExprKind::FunctionCall {
            name: def.name,
            args: ctx.args,
        },
        ty,
    ))
}

// Shared result shapes.

pub(crate) fn int_result(ctx: &mut CallCtx, flen: u32, arg_tps: &[EvalType]) -> FieldType {
    ctx.builtin(EvalType::Int, arg_tps).with_width(flen, 0)
}

pub(crate) fn string_result(ctx: &mut CallCtx, flen: u32, arg_tps: &[EvalType]) -> FieldType {
    ctx.builtin(EvalType::String, arg_tps).with_flen(Some(flen))
}

pub(crate) fn real_result(ctx: &mut CallCtx, arg_tps: &[EvalType]) -> FieldType {
    ctx.builtin(EvalType::Real, arg_tps)
}

pub(crate) fn all_args(ctx: &CallCtx, eval: EvalType) -> Vec<EvalType> {
    vec![eval; ctx.arg_count()]
}

pub(crate) fn blob_result(ctx: &CallCtx) -> FieldType {
    FieldType::new(FieldTypeTp::LongBlob)
        .with_charset(ctx.charset())
        .with_flen(Some(crate::types::consts::MAX_BLOB_WIDTH))
}
