use crate::catalog::column::ColumnMeta;
use crate::catalog::ids::{ColumnId, TableId};
use crate::types::Charset;

#[derive(Debug, Clone)]
pub struct TableMeta {
    pub id: TableId,
    pub name: String,
    pub charset: Charset,
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    /// Column names compare case-insensitively, as in MySQL.
    pub fn column_by_name(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn column_by_id(&self, id: ColumnId) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.id == id)
    }
}
