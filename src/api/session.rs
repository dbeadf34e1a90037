use crate::api::errors::{InferError, ResultColumn, StatementResult};
use crate::binder::scope::ColumnScope;
use crate::binder::{BindError, Binder, bind_expr};
use crate::catalog::Catalog;
use crate::config::{ConfigError, SessionConfig};
use crate::debugger::{Component, phases};
use crate::frontend::sql::ast::{Expr, Literal, SetAssignment, SetStmt, Statement};
use crate::frontend::sql::{parse, parse_expr, parse_statements};
use crate::types::FieldType;
use crate::{db_debug, db_info, db_phase};

pub struct Session {
    catalog: Catalog,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::new())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs one statement. The phase timeline restarts on every call.
    pub fn execute(&mut self, sql: &str) -> Result<StatementResult, InferError> {
        phases::reset();
        db_phase!("statement", {
            db_phase!("parse", { parse(sql) })
                .map_err(InferError::from)
                .and_then(|stmt| self.run(stmt))
        })
    }

    /// Runs `;`-separated statements, stopping at the first failure.
    pub fn execute_script(&mut self, sql: &str) -> Result<Vec<StatementResult>, InferError> {
        phases::reset();
        let stmts = db_phase!("parse", { parse_statements(sql) })?;
        stmts.into_iter().map(|s| self.run(s)).collect()
    }

    pub fn infer(&self, expr_sql: &str, table: Option<&str>) -> Result<FieldType, InferError> {
        phases::reset();
        let expr = db_phase!("parse", { parse_expr(expr_sql) })?;
        let scope = match table {
            Some(name) => {
                let meta = self
                    .catalog
                    .get_table_by_name(name)
                    .ok_or_else(|| BindError::UnknownTable(name.to_string()))?;
                ColumnScope::for_table(meta, None)
            }
            None => ColumnScope::empty(),
        };
        let bound = db_phase!("bind", { bind_expr(&expr, &scope, &self.config) })?;
        Ok(bound.ty)
    }

    fn run(&mut self, stmt: Statement) -> Result<StatementResult, InferError> {
        match stmt {
            Statement::Select(select) => {
                let bound = db_phase!("bind", {
                    Binder::new(&self.catalog, &self.config).bind_select(&select)
                })?;
                let columns = bound
                    .columns
                    .into_iter()
                    .map(|c| ResultColumn {
                        name: c.name,
                        ty: c.expr.ty,
                    })
                    .collect();
                Ok(StatementResult::Columns(columns))
            }
            Statement::CreateTable(ct) => {
                let created = self.catalog.create_table(&ct, self.config.charset)?;
                db_info!(Component::Session, "create table {}", ct.table_name);
                Ok(StatementResult::Created {
                    name: ct.table_name,
                    skipped: created.is_none(),
                })
            }
            Statement::DropTable(dt) => {
                let existed = self.catalog.drop_table(&dt.table_name, dt.if_exists)?;
                Ok(StatementResult::Dropped {
                    name: dt.table_name,
                    existed,
                })
            }
            Statement::Set(set) => {
                self.apply_set(&set)?;
                Ok(StatementResult::Set)
            }
        }
    }

    fn apply_set(&mut self, set: &SetStmt) -> Result<(), ConfigError> {
        for assignment in &set.assignments {
            match assignment {
                SetAssignment::Names { charset, collation } => {
                    self.config.set_names(charset, collation.as_deref())?;
                }
                SetAssignment::Variable { name, .. } if is_user_variable(name) => {
                    db_debug!(Component::Session, "user variable {} ignored", name);
                }
                SetAssignment::Variable { name, value } => {
                    let text = assignment_text(value).ok_or_else(|| ConfigError::InvalidValue {
                        name: name.clone(),
                        value: format!("{:?}", value),
                    })?;
                    self.config.set_variable(name, &text)?;
                    db_debug!(Component::Session, "set {} = {}", name, text);
                }
            }
        }
        Ok(())
    }
}

fn is_user_variable(name: &str) -> bool {
    name.starts_with('@') && !name.starts_with("@@")
}

fn assignment_text(value: &Expr) -> Option<String> {
    match value {
        Expr::Literal(lit) => match lit {
            Literal::String { value, .. } => Some(value.clone()),
            Literal::Integer(s) | Literal::Decimal(s) | Literal::Float(s) => Some(s.clone()),
            Literal::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            _ => None,
        },
        // bare words: ON, OFF, utf8mb4
        Expr::Column { table: None, name } => Some(name.clone()),
        _ => None,
    }
}
