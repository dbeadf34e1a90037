pub mod errors;
pub mod session;


pub use errors::{InferError, ResultColumn, StatementResult};
pub use session::Session;
