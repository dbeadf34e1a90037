use crate::binder::errors::BindError;
use crate::catalog::column::ColumnMeta;
use crate::catalog::table::TableMeta;

#[derive(Debug, Default)]
pub struct ColumnScope<'a> {
    table: Option<(&'a TableMeta, String)>,
}

impl<'a> ColumnScope<'a> {
    pub fn empty() -> Self {
        Self { table: None }
    }

    pub fn for_table(table: &'a TableMeta, alias: Option<&str>) -> Self {
        let visible = alias.unwrap_or(&table.name).to_string();
        Self {
            table: Some((table, visible)),
        }
    }

    pub fn table(&self) -> Option<&'a TableMeta> {
        self.table.as_ref().map(|(t, _)| *t)
    }

    pub fn resolve(&self, qualifier: Option<&str>, name: &str) -> Result<&'a ColumnMeta, BindError> {
        let display = match qualifier {
            Some(q) => format!("{}.{}", q, name),
            None => name.to_string(),
        };
        let Some((table, visible)) = &self.table else {
            return Err(BindError::UnknownColumn(display));
        };
        let table: &'a TableMeta = *table;
        if let Some(q) = qualifier {
            if !q.eq_ignore_ascii_case(visible) {
                return Err(BindError::UnknownColumn(display));
            }
        }
        table
            .column_by_name(name)
            .ok_or(BindError::UnknownColumn(display))
    }

    pub fn expand_wildcard(&self, qualifier: Option<&str>) -> Result<&'a [ColumnMeta], BindError> {
        match (&self.table, qualifier) {
            (Some((table, visible)), Some(q)) if q.eq_ignore_ascii_case(visible) => {
                let table: &'a TableMeta = *table;
                Ok(&table.columns)
            }
            (Some((table, _)), None) => {
                let table: &'a TableMeta = *table;
                Ok(&table.columns)
            }
            (_, Some(q)) => Err(BindError::UnknownTable(q.to_string())),
            (None, None) => Err(BindError::InvalidArgument(
                "'*' used without a FROM table".into(),
            )),
        }
    }
}
