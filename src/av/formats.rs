//! Output formats
//!
//! Everything downstream of the parser is a pure `statements -> text` function behind
//! the [`Formatter`] trait:
//!
//! - `dot`: the Graphviz graph description, one digraph per machine
//! - `treeviz`: a box-drawing view of the statement tree
//! - `json`: the statements as JSON
//!
//! A backend emitting an executable state-machine implementation would be another
//! [`Formatter`]; none exists yet.

pub mod dot;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use dot::{to_dot, DotFormatter};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
