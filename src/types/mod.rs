pub mod charset;
pub mod consts;
pub mod field_type;
pub mod flags;
pub mod merge;
pub mod type_code;
pub mod value;

pub use charset::Charset;
pub use field_type::FieldType;
pub use flags::FieldTypeFlag;
pub use type_code::{EvalType, FieldTypeTp};
pub use value::Value;
