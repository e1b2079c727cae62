//! Error types for conversions
//!
//! Every failure is fatal to the conversion that raised it: there is no
//! partial program and no recovery.

use crate::bril::formats::FormatError;
use crate::bril::location::SourceLocation;
use thiserror::Error;

/// Text that does not match the grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    /// 1-based line
    pub line: usize,
    /// 1-based column, in characters
    pub column: usize,
    /// Byte offset into the source
    pub offset: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn at(location: &SourceLocation<'_>, offset: usize, message: impl Into<String>) -> Self {
        let position = location.byte_to_position(offset);
        Self {
            line: position.line + 1,
            column: position.column + 1,
            offset,
            message: message.into(),
        }
    }
}

/// A literal that matched the grammar but has no numeric value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert literal `{literal}` at line {line}, column {column}: {reason}")]
pub struct ConversionError {
    pub literal: String,
    pub line: usize,
    pub column: usize,
    pub reason: String,
}

/// A structured document that does not have the expected shape
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("function `{function}`, instruction {index}: {reason}")]
    Instruction {
        function: String,
        index: usize,
        reason: String,
    },
}

/// Any failure of a conversion or of the surrounding tooling
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
