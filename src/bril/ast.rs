//! Canonical program model for Bril
//!
//! The model is a pure value tree: a [`Program`] owns its functions, each
//! [`Function`] owns its arguments and statements, and pointer [`Type`]s own
//! their inner type. There are no back references, so the tree is acyclic by
//! construction.
//!
//! Both directions of the tool meet here. The parser builds this model from
//! text, the JSON codec builds it from a document, and the printer and JSON
//! encoder consume it.

pub mod elements;

pub use elements::{Arg, Function, Literal, Program, Statement, Type};
