use std::collections::HashMap;

use crate::catalog::column::{ColumnMeta, column_field_type};
use crate::catalog::errors::CatalogError;
use crate::catalog::ids::*;
use crate::catalog::table::TableMeta;
use crate::debugger::Component;
use crate::frontend::sql::ast::CreateTableStmt;
use crate::types::Charset;
use crate::types::charset::lookup_collation;
use crate::{db_debug, db_trace};

/// In-memory table definitions. Names are matched case-insensitively.
#[derive(Debug, Default)]
pub struct Catalog {
    next_table_id: u32,
    next_column_id: u32,

    tables_by_id: HashMap<TableId, TableMeta>,
    tables_by_name: HashMap<String, TableId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            next_table_id: 1,
            next_column_id: 1,
            ..Default::default()
        }
    }

    // ---------- table API ----------

    /// Registers a table. `default_charset` applies to string columns when
    /// neither the column nor the table names a charset.
    ///
    /// Returns `Ok(None)` when `IF NOT EXISTS` skipped an existing table.
    pub fn create_table(
        &mut self,
        stmt: &CreateTableStmt,
        default_charset: Charset,
    ) -> Result<Option<TableId>, CatalogError> {
        let key = stmt.table_name.to_ascii_lowercase();
        if self.tables_by_name.contains_key(&key) {
            if stmt.if_not_exists {
                db_debug!(Component::Catalog, "table '{}' exists, skipped", stmt.table_name);
                return Ok(None);
            }
            return Err(CatalogError::TableExists(stmt.table_name.clone()));
        }
        if stmt.columns.is_empty() {
            return Err(CatalogError::EmptyTable(stmt.table_name.clone()));
        }

        let charset = table_charset(stmt, default_charset)?;

        let mut columns: Vec<ColumnMeta> = Vec::with_capacity(stmt.columns.len());
        for def in &stmt.columns {
            if columns.iter().any(|c| c.name.eq_ignore_ascii_case(&def.name)) {
                return Err(CatalogError::DuplicateColumn(def.name.clone()));
            }
            let field_type = column_field_type(def, charset)?;
            db_trace!(Component::Catalog, "column {} -> {}", def.name, field_type);

            columns.push(ColumnMeta {
                id: ColumnId(self.next_column_id + columns.len() as u32),
                name: def.name.clone(),
                field_type,
                nullable: def.nullable,
                has_default: def.default.is_some(),
            });
        }

        // ids are only consumed once the whole definition is valid
        self.next_column_id += columns.len() as u32;
        let table_id = TableId(self.next_table_id);
        self.next_table_id += 1;

        let meta = TableMeta {
            id: table_id,
            name: stmt.table_name.clone(),
            charset,
            columns,
        };
        db_debug!(
            Component::Catalog,
            "created table '{}' ({} columns)",
            meta.name,
            meta.columns.len()
        );

        self.tables_by_name.insert(key, table_id);
        self.tables_by_id.insert(table_id, meta);

        Ok(Some(table_id))
    }

    /// Removes a table. Returns `false` when `if_exists` and nothing was dropped.
    pub fn drop_table(&mut self, name: &str, if_exists: bool) -> Result<bool, CatalogError> {
        match self.tables_by_name.remove(&name.to_ascii_lowercase()) {
            Some(id) => {
                self.tables_by_id.remove(&id);
                db_debug!(Component::Catalog, "dropped table '{}'", name);
                Ok(true)
            }
            None if if_exists => Ok(false),
            None => Err(CatalogError::TableNotFound(name.to_string())),
        }
    }

    pub fn get_table_by_id(&self, id: TableId) -> Option<&TableMeta> {
        self.tables_by_id.get(&id)
    }

    pub fn get_table_by_name(&self, name: &str) -> Option<&TableMeta> {
        self.tables_by_name
            .get(&name.to_ascii_lowercase())
            .and_then(|id| self.tables_by_id.get(id))
    }

    pub fn table_names(&self) -> Vec<&str> {
        let mut tables: Vec<&TableMeta> = self.tables_by_id.values().collect();
        tables.sort_by_key(|t| t.id.0);
        tables.into_iter().map(|t| t.name.as_str()).collect()
    }
}

fn table_charset(stmt: &CreateTableStmt, default: Charset) -> Result<Charset, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidType(stmt.table_name.clone(), reason);

    let declared = match &stmt.charset {
        Some(name) => Some(
            Charset::from_name(name).ok_or_else(|| invalid(format!("unknown charset '{}'", name)))?,
        ),
        None => None,
    };
    let from_collation = match &stmt.collation {
        Some(name) => Some(
            lookup_collation(name)
                .ok_or_else(|| invalid(format!("unknown collation '{}'", name)))?
                .0,
        ),
        None => None,
    };

    match (declared, from_collation) {
        (Some(cs), Some(coll)) if cs != coll => Err(invalid(format!(
            "collation '{}' is not valid for charset '{}'",
            stmt.collation.as_deref().unwrap_or_default(),
            cs
        ))),
        (Some(cs), _) | (None, Some(cs)) => Ok(cs),
        (None, None) => Ok(default),
    }
}
