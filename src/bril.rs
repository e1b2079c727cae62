//! Main module for the bril text format

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod location;
pub mod parsing;

pub use ast::{Arg, Function, Literal, Program, Statement, Type};
pub use config::BriltxtConfig;
pub use error::{ConversionError, DecodeError, Error, SyntaxError};
pub use formats::{FormatError, FormatRegistry, Formatter};

/// Parse program text all the way to the canonical model.
///
/// This is tokenize + parse + build; any failure aborts the whole conversion.
pub fn parse_program(source: &str) -> Result<Program, Error> {
    let tree = parsing::parse_tree(source)?;
    let program = building::build(tree, source)?;
    Ok(program)
}
