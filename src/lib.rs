pub mod config;
pub mod debugger;

pub mod api;
pub mod binder;
pub mod catalog;
pub mod frontend;
pub mod infer;
pub mod types;
