//! Lexer module for the av language
//!
//! Tokenization is done in two steps. A vanilla logos scanner cuts the source into
//! lexemes (`->`, braces, identifier runs, any other single non-whitespace character;
//! whitespace is skipped). Each lexeme is then positioned and classified.
//!
//! Classification is context sensitive: the same name is a [`TokenType::State`] when it
//! is a state reference (inside `[ ... ]`, or right after `START` / `->`) and a
//! [`TokenType::Identifier`] everywhere else. The rules live in [`classify`] only.

pub mod classify;
pub mod lexer_impl;
pub mod location;
pub mod tokens;

pub use classify::{classify as classify_lexeme, ClassifyContext};
pub use lexer_impl::tokenize;
pub use location::{Position, SourceLocation};
pub use tokens::{Lexeme, Token, TokenType};

use crate::av::error::LexError;

/// Main lexer entry point
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source)
}
