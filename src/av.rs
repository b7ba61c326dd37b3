//! Main module for av library functionality
//!
//! av is a small language for declaring finite-state machines:
//!
//! ```text
//! def M {
//!     START -> a ;
//!     ACCEPT -> [b] ;
//!     STATE a -> { go -> [b] ; } ;
//!     STATE b -> { } ;
//! } ;
//! ```
//!
//! The pipeline is source text -> [lexer] -> tokens -> [parser] -> statements -> [formats].
//! Each stage consumes its whole input before the next one runs, and nothing is shared
//! between runs, so independent sources can be processed concurrently.

pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

pub use error::AvError;

use crate::av::config::GraphConfig;
use crate::av::formats::dot::DotFormatter;

/// Compile av source straight to a graph description with the default layout.
pub fn compile(source: &str) -> Result<String, AvError> {
    compile_with_config(source, &GraphConfig::default())
}

/// Compile av source to a graph description using the given layout settings.
pub fn compile_with_config(source: &str, config: &GraphConfig) -> Result<String, AvError> {
    let program = parser::parse_source(source)?;
    Ok(DotFormatter::new(config.clone()).generate(&program))
}
