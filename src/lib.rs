//! # briltxt
//!
//! A parser and pretty-printer for the textual form of Bril programs.
//!
//! The text form is meant for people to read and edit; the JSON form is what
//! analysis and optimization passes consume. This crate converts between the
//! two through a single canonical [`Program`](bril::Program) model:
//!
//! ```text
//! text --tokenize--> tokens --parse--> parse tree --build--> Program --json--> document
//! document --json--> Program --print--> text
//! ```

pub mod bril;

pub use bril::{
    parse_program, Arg, BriltxtConfig, Error, FormatRegistry, Function, Literal, Program,
    Statement, Type,
};
