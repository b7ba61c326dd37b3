//! Parser module for the av language
//!
//! Turns the token sequence from the [lexer](crate::av::lexer) into an ordered list of
//! top-level [`Statement`]s. Only syntax is checked: whether a transition target or the
//! start state was ever declared is left to later stages.

pub mod ast;
#[allow(clippy::module_inception)]
pub mod parser;

pub use ast::{Statement, SELF_MARKER};
pub use parser::{Parser, MAX_NESTING_DEPTH};

use crate::av::error::{AvError, SyntaxError};
use crate::av::lexer::{lex, Token};

/// Parse a token sequence.
pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> Result<Vec<Statement>, AvError> {
    let tokens = lex(source)?;
    Ok(parse(&tokens)?)
}
