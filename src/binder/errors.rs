use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    UnknownTable(String),
    UnknownColumn(String),
    UnknownFunction(String),
    SignatureNotFound {
        name: String,
        arity: usize,
        arg_types: Vec<String>,
    },
    NestedAggregate(String),
    InvalidArgument(String),
    NotImplemented(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::UnknownTable(t) => write!(f, "'{}' table does not exist", t),
            BindError::UnknownColumn(c) => write!(f, "'{}' column does not exist", c),
            BindError::UnknownFunction(name) => write!(f, "function '{}' does not exist", name),
            BindError::SignatureNotFound {
                name,
                arity,
                arg_types,
            } => write!(
                f,
                "incorrect parameter count in the call to native function '{}': {} argument(s) of type ({})",
                name,
                arity,
                arg_types.join(", ")
            ),
            BindError::NestedAggregate(name) => {
                write!(f, "invalid use of group function '{}'", name)
            }
            BindError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            BindError::NotImplemented(msg) => write!(f, "not implemented: {}", msg),
        }
    }
}

impl std::error::Error for BindError {}
