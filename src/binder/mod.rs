pub mod bind_expr;
pub mod bind_stmt;
pub mod bound;
pub mod errors;
pub mod scope;


pub use bind_expr::bind_expr;
pub use bind_stmt::Binder;
pub use bound::{BoundColumn, BoundExpr, BoundExprKind, BoundSelect};
pub use errors::BindError;
