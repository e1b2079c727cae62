//! Parsing for the bril text format
//!
//! Turns source text into a parse tree ([ir]). Nothing here converts numbers;
//! see [building](crate::bril::building) for that step.

pub mod ir;
pub mod parser;

pub use ir::{ArgNode, FunctionNode, LiteralKind, LiteralNode, ProgramNode, StatementNode};
pub use parser::parse_tokens;

use crate::bril::error::SyntaxError;
use crate::bril::lexing::tokenize;

/// Tokenize and parse a whole source string
pub fn parse_tree(source: &str) -> Result<ProgramNode, SyntaxError> {
    let tokens = tokenize(source)?;
    parse_tokens(tokens, source)
}
