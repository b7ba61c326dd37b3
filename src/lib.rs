//! # av
//!
//! Front end for the av language: finite-state machine definitions are lexed, parsed into
//! statements and rendered as Graphviz graph descriptions.
//!
//! ```text
//! let dot = av::av::compile("def M { START -> a ; } ;")?;
//! ```

pub mod av;
