//! Bound expression tree produced by the binder.
//!
//! Every node carries the type inferred for it at construction. Implicit
//! argument conversions show up as `Cast { implicit: true }` nodes.

use std::fmt;

use crate::catalog::ids::{ColumnId, TableId};
use crate::frontend::sql::ast::{BinaryOp, UnaryOp};
use crate::types::field_type::FieldType;
use crate::types::type_code::FieldTypeTp;
use crate::types::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundExpr {
    pub kind: BoundExprKind,
    pub ty: FieldType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundExprKind {
    Literal(Value),

    ColumnRef {
        column_id: ColumnId,
        name: String,
    },

    UnaryOp {
        op: UnaryOp,
        expr: Box<BoundExpr>,
    },

    BinaryOp {
        op: BinaryOp,
        left: Box<BoundExpr>,
        right: Box<BoundExpr>,
    },

    FunctionCall {
        name: &'static str,
        args: Vec<BoundExpr>,
    },

    Cast {
        expr: Box<BoundExpr>,
        implicit: bool,
    },

    Aggregate {
        func: AggregateFunc,
        args: Vec<BoundExpr>,
        distinct: bool,
    },

    CaseWhen {
        branches: Vec<(BoundExpr, BoundExpr)>,
        else_expr: Option<Box<BoundExpr>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    GroupConcat,
    BitAnd,
    BitOr,
    BitXor,
    Statistic(&'static str),
}

impl AggregateFunc {
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "count" => AggregateFunc::Count,
            "sum" => AggregateFunc::Sum,
            "avg" => AggregateFunc::Avg,
            "min" => AggregateFunc::Min,
            "max" => AggregateFunc::Max,
            "group_concat" => AggregateFunc::GroupConcat,
            "bit_and" => AggregateFunc::BitAnd,
            "bit_or" => AggregateFunc::BitOr,
            "bit_xor" => AggregateFunc::BitXor,
            "std" => AggregateFunc::Statistic("std"),
            "stddev" => AggregateFunc::Statistic("stddev"),
            "stddev_pop" => AggregateFunc::Statistic("stddev_pop"),
            "stddev_samp" => AggregateFunc::Statistic("stddev_samp"),
            "variance" => AggregateFunc::Statistic("variance"),
            "var_pop" => AggregateFunc::Statistic("var_pop"),
            "var_samp" => AggregateFunc::Statistic("var_samp"),
            _ => return None,
        };
        Some(func)
    }

    pub fn name(self) -> &'static str {
        match self {
            AggregateFunc::Count => "count",
            AggregateFunc::Sum => "sum",
            AggregateFunc::Avg => "avg",
            AggregateFunc::Min => "min",
            AggregateFunc::Max => "max",
            AggregateFunc::GroupConcat => "group_concat",
            AggregateFunc::BitAnd => "bit_and",
            AggregateFunc::BitOr => "bit_or",
            AggregateFunc::BitXor => "bit_xor",
            AggregateFunc::Statistic(name) => name,
        }
    }
}

impl BoundExpr {
    pub fn new(kind: BoundExprKind, ty: FieldType) -> Self {
        Self { kind, ty }
    }

    pub fn literal(value: Value, ty: FieldType) -> Self {
        Self::new(BoundExprKind::Literal(value), ty)
    }

    pub fn implicit_cast(self, ty: FieldType) -> Self {
        Self::new(
            BoundExprKind::Cast {
                expr: Box::new(self),
                implicit: true,
            },
            ty,
        )
    }

    pub fn cast_in_place(&mut self, ty: FieldType) {
        let placeholder = BoundExpr::literal(Value::Null, FieldType::new(FieldTypeTp::Null));
        let inner = std::mem::replace(self, placeholder);
        *self = inner.implicit_cast(ty);
    }

    /// The folded value when the node is a constant: a literal, possibly
    /// negated or implicitly converted.
    pub fn constant(&self) -> Option<Value> {
        match &self.kind {
            BoundExprKind::Literal(v) => Some(v.clone()),
            BoundExprKind::UnaryOp {
                op: UnaryOp::Minus,
                expr,
            } => expr.constant().and_then(|v| v.negate()),
            BoundExprKind::Cast {
                expr,
                implicit: true,
            } => expr.constant(),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.constant().is_some()
    }

    pub fn contains_aggregate(&self) -> bool {
        match &self.kind {
            BoundExprKind::Aggregate { .. } => true,
            BoundExprKind::Literal(_) | BoundExprKind::ColumnRef { .. } => false,
            BoundExprKind::UnaryOp { expr, .. } | BoundExprKind::Cast { expr, .. } => {
                expr.contains_aggregate()
            }
            BoundExprKind::BinaryOp { left, right, .. } => {
                left.contains_aggregate() || right.contains_aggregate()
            }
            BoundExprKind::FunctionCall { args, .. } => {
                args.iter().any(BoundExpr::contains_aggregate)
            }
            BoundExprKind::CaseWhen {
                branches,
                else_expr,
            } => {
                branches
                    .iter()
                    .any(|(w, t)| w.contains_aggregate() || t.contains_aggregate())
                    || else_expr.as_ref().is_some_and(|e| e.contains_aggregate())
            }
        }
    }
}

impl fmt::Display for BoundExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BoundExprKind::Literal(v) => write!(f, "{}", v),
            BoundExprKind::ColumnRef { name, .. } => write!(f, "{}", name),
            BoundExprKind::UnaryOp { op, expr } => {
                let sym = match op {
                    UnaryOp::Not => "NOT ",
                    UnaryOp::Minus => "-",
                    UnaryOp::Plus => "+",
                    UnaryOp::BitNot => "~",
                };
                write!(f, "{}{}", sym, expr)
            }
            BoundExprKind::BinaryOp { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            BoundExprKind::FunctionCall { name, args } => {
                write!(f, "{}(", name)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            BoundExprKind::Cast { expr, implicit } => {
                let kw = if *implicit { "implicit_cast" } else { "cast" };
                write!(f, "{}({} AS {})", kw, expr, self.ty.tp)
            }
            BoundExprKind::Aggregate {
                func,
                args,
                distinct,
            } => {
                write!(f, "{}(", func.name())?;
                if *distinct {
                    write!(f, "DISTINCT ")?;
                }
                write_list(f, args)?;
                write!(f, ")")
            }
            BoundExprKind::CaseWhen {
                branches,
                else_expr,
            } => {
                write!(f, "CASE")?;
                for (when, then) in branches {
                    write!(f, " WHEN {} THEN {}", when, then)?;
                }
                if let Some(e) = else_expr {
                    write!(f, " ELSE {}", e)?;
                }
                write!(f, " END")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, args: &[BoundExpr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundColumn {
    pub name: String,
    pub expr: BoundExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundSelect {
    pub table_id: Option<TableId>,
    pub columns: Vec<BoundColumn>,
}
