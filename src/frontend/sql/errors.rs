use std::fmt;

use crate::frontend::sql::{lexer::Token, parser::Position};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnexpectedEOF {
        position: Position,
    },

    UnexpectedToken {
        token: Token,
        position: Position,
    },

    Expected {
        expected: String,
        found: Option<String>,
        position: Position,
    },

    Unsupported {
        message: String,
        position: Position,
    },

    InvalidLiteral {
        literal: String,
        position: Position,
    },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedEOF { position }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::Expected { position, .. }
            | ParseError::Unsupported { position, .. }
            | ParseError::InvalidLiteral { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEOF { position } => {
                write!(f, "parse error at {}: unexpected end of input", position)
            }

            ParseError::UnexpectedToken { token, position } => {
                write!(
                    f,
                    "parse error at {}: unexpected token '{:?}'",
                    position, token
                )
            }

            ParseError::Expected {
                expected,
                found: Some(found),
                position,
            } => write!(
                f,
                "parse error at {}: expected {}, found {}",
                position, expected, found
            ),

            ParseError::Expected {
                expected,
                found: None,
                position,
            } => write!(
                f,
                "parse error at {}: expected {}, found end of input",
                position, expected
            ),

            ParseError::Unsupported { message, position } => {
                write!(f, "parse error at {}: unsupported {}", position, message)
            }

            ParseError::InvalidLiteral { literal, position } => {
                write!(
                    f,
                    "parse error at {}: invalid literal '{}'",
                    position, literal
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
