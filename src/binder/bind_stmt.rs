//! Statement binding.
//!
//! Resolves the FROM table, builds the column scope and binds every item of
//! the select list.

use crate::binder::bind_expr::bind_expr;
use crate::binder::bound::*;
use crate::binder::errors::BindError;
use crate::binder::scope::ColumnScope;
use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::debugger::Component;
use crate::db_debug;
use crate::frontend::sql::ast::*;

pub struct Binder<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a SessionConfig,
}

impl<'a> Binder<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SessionConfig) -> Self {
        Self { catalog, config }
    }

    pub fn bind_select(&self, stmt: &SelectStmt) -> Result<BoundSelect, BindError> {
        // 1. Resolve FROM clause
        let scope = self.bind_from(stmt.from.as_ref())?;

        // 2. Bind projection
        let mut columns = Vec::new();
        for item in &stmt.columns {
            match &item.expr {
                Expr::Wildcard { table } => {
                    self.expand_star(&mut columns, table.as_deref(), &scope)?;
                }
                other => {
                    let expr = bind_expr(other, &scope, self.config)?;
                    let name = item.alias.clone().unwrap_or_else(|| item.text.clone());
                    columns.push(BoundColumn { name, expr });
                }
            }
        }

        if columns.is_empty() {
            return Err(BindError::InvalidArgument("empty select list".into()));
        }
        db_debug!(Component::Binder, "bound {} column(s)", columns.len());

        Ok(BoundSelect {
            table_id: scope.table().map(|t| t.id),
            columns,
        })
    }

    fn bind_from(&self, from: Option<&FromItem>) -> Result<ColumnScope<'a>, BindError> {
        let Some(from) = from else {
            return Ok(ColumnScope::empty());
        };
        let table = self
            .catalog
            .get_table_by_name(&from.name)
            .ok_or_else(|| BindError::UnknownTable(from.name.clone()))?;
        Ok(ColumnScope::for_table(table, from.alias.as_deref()))
    }

    fn expand_star(
        &self,
        out: &mut Vec<BoundColumn>,
        table: Option<&str>,
        scope: &ColumnScope,
    ) -> Result<(), BindError> {
        for col in scope.expand_wildcard(table)? {
            out.push(BoundColumn {
                name: col.name.clone(),
                expr: BoundExpr::new(
                    BoundExprKind::ColumnRef {
                        column_id: col.id,
                        name: col.name.clone(),
                    },
                    col.field_type.clone(),
                ),
            });
        }
        Ok(())
    }
}
