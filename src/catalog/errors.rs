use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    TableExists(String),
    TableNotFound(String),
    DuplicateColumn(String),
    EmptyTable(String),
    InvalidType(String, String),
    InvalidDefault(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::TableExists(t) => write!(f, "table '{}' already exists", t),
            CatalogError::TableNotFound(t) => write!(f, "unknown table '{}'", t),
            CatalogError::DuplicateColumn(c) => write!(f, "duplicate column name '{}'", c),
            CatalogError::EmptyTable(t) => {
                write!(f, "table '{}' must have at least one column", t)
            }
            CatalogError::InvalidType(c, reason) => {
                write!(f, "invalid type for column '{}': {}", c, reason)
            }
            CatalogError::InvalidDefault(c) => write!(f, "invalid default value for '{}'", c),
        }
    }
}

impl std::error::Error for CatalogError {}
