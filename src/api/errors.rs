use crate::{
    binder::errors::BindError, catalog::errors::CatalogError, config::ConfigError,
    frontend::sql::errors::ParseError, types::FieldType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ResultColumn {
    pub name: String,
    pub ty: FieldType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementResult {
    Created {
        name: String,
        /// `IF NOT EXISTS` found the table already there.
        skipped: bool,
    },
    Dropped {
        name: String,
        existed: bool,
    },
    Set,
    Columns(Vec<ResultColumn>),
}

#[derive(Debug)]
pub enum InferError {
    Parse(ParseError),
    Bind(BindError),
    Catalog(CatalogError),
    Config(ConfigError),
}

impl std::fmt::Display for InferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferError::Parse(e) => write!(f, "Parse error: {}", e),
            InferError::Bind(e) => write!(f, "Bind error: {}", e),
            InferError::Catalog(e) => write!(f, "catalog error: {e}"),
            InferError::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<ParseError> for InferError {
    fn from(e: ParseError) -> Self {
        InferError::Parse(e)
    }
}

impl From<BindError> for InferError {
    fn from(e: BindError) -> Self {
        InferError::Bind(e)
    }
}

impl From<CatalogError> for InferError {
    fn from(e: CatalogError) -> Self {
        InferError::Catalog(e)
    }
}

impl From<ConfigError> for InferError {
    fn from(e: ConfigError) -> Self {
        InferError::Config(e)
    }
}
