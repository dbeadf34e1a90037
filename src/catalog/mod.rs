pub mod catalog;
pub mod column;
pub mod errors;
pub mod ids;
pub mod table;


pub use catalog::Catalog;
pub use column::ColumnMeta;
pub use errors::CatalogError;
pub use table::TableMeta;
