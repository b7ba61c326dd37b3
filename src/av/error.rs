//! Error types for lexing and parsing
//!
//! Both kinds are fatal: the first one aborts the run and no partial token list or
//! statement list is returned alongside it.

use thiserror::Error;

/// A lexeme that fits none of the token shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected token {value} at row {row}, col {col}")]
pub struct LexError {
    pub value: String,
    /// 1-based
    pub row: usize,
    /// 1-based
    pub col: usize,
}

/// A token sequence that does not match the grammar at the parser's position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at row {row}, col {col}")]
pub struct SyntaxError {
    /// Expectation-specific message, without the position suffix.
    pub message: String,
    /// Text of the offending token; `None` when the input ran out.
    pub found: Option<String>,
    pub row: usize,
    pub col: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, found: Option<String>, row: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            found,
            row,
            col,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.found.is_none()
    }
}

/// Any error the lex -> parse pipeline can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
