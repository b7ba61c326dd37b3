//! Format registry for program serialization
//!
//! Each output format implements the [`Formatter`] trait (`statements -> text`) and can be
//! registered with a [`FormatRegistry`] by name. Code generation backends plug in here.

use std::collections::HashMap;

use thiserror::Error;

use crate::av::config::GraphConfig;
use crate::av::parser::Statement;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for program formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "dot", "treeviz")
    fn name(&self) -> &str;

    /// Serialize a program to this format
    fn serialize(&self, program: &[Statement]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of program formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a program using the named format
    pub fn serialize(&self, program: &[Statement], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(program)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters and default graph layout
    pub fn with_defaults() -> Self {
        Self::with_graph_config(GraphConfig::default())
    }

    /// Create a registry with the built-in formatters, using `graph` for the dot output
    pub fn with_graph_config(graph: GraphConfig) -> Self {
        let mut registry = Self::new();

        registry.register(super::DotFormatter::new(graph));
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
