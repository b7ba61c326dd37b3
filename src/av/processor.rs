//! Processing API for av sources
//!
//! A processing spec names a stage (what to produce) and a format (how to print it),
//! written `<stage>-<format>`:
//!
//! - `token-simple`, `token-json`: the classified token sequence
//! - `ast-json`, `ast-treeviz`, `ast-dot`: the parsed statements through a [`Formatter`]
//!
//! [`process_file`] is the thin file-loading layer used by the binary; the pipeline
//! itself ([`process_source`]) only ever sees text.
//!
//! [`Formatter`]: crate::av::formats::Formatter

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::av::config::GraphConfig;
use crate::av::error::{AvError, LexError, SyntaxError};
use crate::av::formats::{FormatError, FormatRegistry};
use crate::av::lexer::{lex, Token};
use crate::av::parser::parse;

/// Extension av source files must carry
pub const SOURCE_EXTENSION: &str = "av";

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
    Dot,
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Dot => "dot",
        }
    }
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-dot"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "treeviz" => OutputFormat::Treeviz,
            "dot" => OutputFormat::Dot,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Treeviz | OutputFormat::Dot) => {
                Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with ast stage",
                    format.name()
                )))
            }
            (ProcessingStage::Ast, OutputFormat::Simple) => {
                Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with token stage".to_string(),
                ))
            }
            _ => Ok(ProcessingSpec { stage, format }),
        }
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Dot,
            },
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        write!(f, "{}-{}", stage, self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("Invalid file extension: expected .av got {0}")]
    InvalidExtension(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<AvError> for ProcessingError {
    fn from(err: AvError) -> Self {
        match err {
            AvError::Lex(e) => ProcessingError::Lex(e),
            AvError::Syntax(e) => ProcessingError::Syntax(e),
        }
    }
}

/// Process av source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    config: &GraphConfig,
) -> Result<String, ProcessingError> {
    tracing::debug!(%spec, "processing source");
    let tokens = lex(source)?;

    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokens, spec.format),
        ProcessingStage::Ast => {
            let program = parse(&tokens)?;
            let registry = FormatRegistry::with_graph_config(config.clone());
            Ok(registry.serialize(&program, spec.format.name())?)
        }
    }
}

/// Load an `.av` file and process it according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &GraphConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    check_extension(file_path)?;

    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::IoError(format!("{}: {}", file_path.display(), e)))?;

    process_source(&content, spec, config)
}

fn check_extension(path: &Path) -> Result<(), ProcessingError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(SOURCE_EXTENSION) => Ok(()),
        Some(other) => Err(ProcessingError::InvalidExtension(format!(".{}", other))),
        None => Err(ProcessingError::InvalidExtension(String::new())),
    }
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            // One output line per source row
            let mut result = String::new();
            let mut row = tokens.first().map(|t| t.row).unwrap_or(1);
            for token in tokens {
                if token.row != row {
                    result.push('\n');
                    row = token.row;
                }
                result.push_str(&token.to_string());
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string()).into()),
        OutputFormat::Treeviz | OutputFormat::Dot => Err(ProcessingError::InvalidFormatType(
            format!("{} format only works with ast stage", format.name()),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}
