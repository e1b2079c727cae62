//! Parse tree produced by the grammar
//!
//! The tree mirrors the productions, with ambiguity between the statement
//! forms already settled. Literals keep their source text and byte range so
//! that numeric conversion (and its errors) happens while building the model.

use crate::bril::ast::Type;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramNode {
    pub functions: Vec<FunctionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    pub name: String,
    pub args: Vec<ArgNode>,
    pub return_type: Option<Type>,
    pub body: Vec<StatementNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgNode {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementNode {
    ConstDef {
        dest: String,
        ty: Option<Type>,
        value: LiteralNode,
    },
    ValueOp {
        dest: String,
        ty: Option<Type>,
        opcode: String,
        args: Vec<String>,
    },
    EffectOp {
        opcode: String,
        args: Vec<String>,
    },
    Label {
        name: String,
    },
}

/// Which literal production matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Bool,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralNode {
    pub kind: LiteralKind,
    pub text: String,
    pub span: Range<usize>,
}

impl LiteralNode {
    pub fn new(kind: LiteralKind, text: String, span: Range<usize>) -> Self {
        Self { kind, text, span }
    }
}
