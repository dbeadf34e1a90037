//! Expression binding.
//!
//! Converts SQL AST expressions into [`BoundExpr`]:
//! - resolves column names against the scope
//! - asks `infer` for the descriptor of every node it builds
//!
//! Children are bound before their parent, so each rule sees final argument types.

use crate::binder::bound::{AggregateFunc, BoundExpr, BoundExprKind};
use crate::binder::errors::BindError;
use crate::binder::scope::ColumnScope;
use crate::config::SessionConfig;
use crate::debugger::Component;
use crate::db_trace;
use crate::frontend::sql::ast::{BinaryOp, Expr as SqlExpr, Literal, UnaryOp};
use crate::infer::{aggregate, cast, coercion, control, functions, literal};

pub fn bind_expr(
    expr: &SqlExpr,
    scope: &ColumnScope,
    config: &SessionConfig,
) -> Result<BoundExpr, BindError> {
    ExprBinder::new(scope, config).bind(expr)
}

pub struct ExprBinder<'s, 'a> {
    scope: &'s ColumnScope<'a>,
    config: &'s SessionConfig,
    in_aggregate: bool,
}

impl<'s, 'a> ExprBinder<'s, 'a> {
    pub fn new(scope: &'s ColumnScope<'a>, config: &'s SessionConfig) -> Self {
        Self {
            scope,
            config,
            in_aggregate: false,
        }
    }

    pub fn bind(&mut self, expr: &SqlExpr) -> Result<BoundExpr, BindError> {
        let config = self.config;
        match expr {
            // ---------- leaves ----------
            SqlExpr::Column { table, name } => {
                let col = self.scope.resolve(table.as_deref(), name)?;
                Ok(BoundExpr::new(
                    BoundExprKind::ColumnRef {
                        column_id: col.id,
                        name: col.name.clone(),
                    },
                    col.field_type.clone(),
                ))
            }
            SqlExpr::Wildcard { .. } => Err(BindError::InvalidArgument(
                "'*' is only valid in the select list or COUNT(*)".into(),
            )),
            SqlExpr::Literal(lit) => literal::bind_literal(lit, config),
            SqlExpr::UserVar(name) => Ok(literal::user_var(name, config)),
            SqlExpr::TimeUnit(unit) => literal::bind_literal(
                &Literal::String {
                    value: unit.clone(),
                    introducer: None,
                },
                config,
            ),

            // ---------- operators ----------
            SqlExpr::Unary { op, expr } => {
                let inner = self.bind(expr)?;
                Ok(coercion::unary(*op, inner, config))
            }
            SqlExpr::Binary { left, op, right } => {
                let l = self.bind(left)?;
                let r = self.bind(right)?;
                coercion::binary(*op, l, r, config)
            }

            // ---------- calls ----------
            SqlExpr::Function {
                name,
                args,
                distinct,
            } => self.bind_call(name, args, *distinct),
            SqlExpr::Cast { expr, target } => {
                let inner = self.bind(expr)?;
                cast::cast(inner, target, config)
            }
            SqlExpr::ConvertUsing { expr, charset } => {
                let inner = self.bind(expr)?;
                cast::convert_using(inner, charset, config)
            }
            SqlExpr::Case {
                operand,
                branches,
                else_expr,
            } => self.bind_case(operand.as_deref(), branches, else_expr.as_deref()),

            // ---------- predicates ----------
            SqlExpr::InList {
                expr,
                list,
                negated,
            } => {
                let mut args = Vec::with_capacity(list.len() + 1);
                args.push(self.bind(expr)?);
                for item in list {
                    args.push(self.bind(item)?);
                }
                Ok(coercion::in_list(args, *negated, config))
            }
            SqlExpr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let e = self.bind(expr)?;
                let lo = self.bind(low)?;
                let hi = self.bind(high)?;
                Ok(coercion::between(e, lo, hi, *negated, config))
            }
            SqlExpr::Like {
                expr,
                pattern,
                escape,
                negated,
            } => {
                let e = self.bind(expr)?;
                let p = self.bind(pattern)?;
                let esc = escape.as_deref().map(|x| self.bind(x)).transpose()?;
                coercion::like(e, p, esc, *negated, config)
            }
            SqlExpr::Regexp {
                expr,
                pattern,
                negated,
            } => {
                let e = self.bind(expr)?;
                let p = self.bind(pattern)?;
                Ok(coercion::regexp(e, p, *negated, config))
            }
            SqlExpr::IsNull { expr, negated } => {
                let e = self.bind(expr)?;
                let is_null = functions::call("isnull", vec![e], config)?;
                if *negated {
                    Ok(coercion::unary(UnaryOp::Not, is_null, config))
                } else {
                    Ok(is_null)
                }
            }
            SqlExpr::IsBool {
                expr,
                value,
                negated,
            } => {
                let e = self.bind(expr)?;
                Ok(coercion::is_bool(e, *value, *negated, config))
            }
        }
    }

    fn bind_call(&mut self, name: &str, args: &[SqlExpr], distinct: bool) -> Result<BoundExpr, BindError> {
        let lower = name.to_ascii_lowercase();

        if let Some(func) = AggregateFunc::from_name(&lower) {
            if self.in_aggregate {
                return Err(BindError::NestedAggregate(lower));
            }
            self.in_aggregate = true;
            let bound = self.bind_aggregate_args(func, args);
            self.in_aggregate = false;

            let expr = aggregate::aggregate(func, bound?, distinct, self.config)?;
            db_trace!(Component::Binder, "{} -> {}", expr, expr.ty);
            return Ok(expr);
        }

        if distinct {
            return Err(BindError::InvalidArgument(format!(
                "DISTINCT is only allowed in aggregate functions, not {}",
                lower
            )));
        }
        let bound = args
            .iter()
            .map(|a| self.bind(a))
            .collect::<Result<Vec<_>, _>>()?;
        functions::call(&lower, bound, self.config)
    }

    fn bind_aggregate_args(
        &mut self,
        func: AggregateFunc,
        args: &[SqlExpr],
    ) -> Result<Vec<BoundExpr>, BindError> {
        // COUNT(*) counts rows: any non-null constant will do
        if func == AggregateFunc::Count && matches!(args, [SqlExpr::Wildcard { table: None }]) {
            let one = literal::bind_literal(&Literal::Integer("1".into()), self.config)?;
            return Ok(vec![one]);
        }
        args.iter().map(|a| self.bind(a)).collect()
    }

    fn bind_case(
        &mut self,
        operand: Option<&SqlExpr>,
        branches: &[(SqlExpr, SqlExpr)],
        else_expr: Option<&SqlExpr>,
    ) -> Result<BoundExpr, BindError> {
        let operand = operand.map(|o| self.bind(o)).transpose()?;

        let mut bound = Vec::with_capacity(branches.len());
        for (when, then) in branches {
            let when = self.bind(when)?;
            let cond = match &operand {
                Some(op) => coercion::binary(BinaryOp::Eq, op.clone(), when, self.config)?,
                None => when,
            };
            bound.push((cond, self.bind(then)?));
        }
        let else_expr = else_expr.map(|e| self.bind(e)).transpose()?;

        Ok(control::case_when(bound, else_expr, self.config))
    }
}
