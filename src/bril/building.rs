//! Building the program model from the parse tree
//!
//! A pure fold: every parse-tree node maps onto exactly one model element.
//! The only thing that can fail is turning literal text into a number.

use crate::bril::ast::{Arg, Function, Literal, Program, Statement};
use crate::bril::error::ConversionError;
use crate::bril::location::SourceLocation;
use crate::bril::parsing::{
    ArgNode, FunctionNode, LiteralKind, LiteralNode, ProgramNode, StatementNode,
};
use std::num::IntErrorKind;

/// Fold a parse tree into a [`Program`]
///
/// `source` is the text the tree was parsed from; it is only used to locate
/// conversion errors.
pub fn build(tree: ProgramNode, source: &str) -> Result<Program, ConversionError> {
    let location = SourceLocation::new(source);
    let functions = tree
        .functions
        .into_iter()
        .map(|function| build_function(function, &location))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program { functions })
}

fn build_function(
    node: FunctionNode,
    location: &SourceLocation<'_>,
) -> Result<Function, ConversionError> {
    let body = node
        .body
        .into_iter()
        .map(|stmt| build_statement(stmt, location))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Function {
        name: node.name,
        args: node.args.into_iter().map(build_arg).collect(),
        return_type: node.return_type,
        body,
    })
}

fn build_arg(node: ArgNode) -> Arg {
    Arg {
        name: node.name,
        ty: node.ty,
    }
}

fn build_statement(
    node: StatementNode,
    location: &SourceLocation<'_>,
) -> Result<Statement, ConversionError> {
    Ok(match node {
        StatementNode::ConstDef { dest, ty, value } => Statement::ConstDef {
            dest,
            ty,
            value: build_literal(&value, location)?,
        },
        StatementNode::ValueOp {
            dest,
            ty,
            opcode,
            args,
        } => Statement::ValueOp {
            dest,
            ty,
            opcode,
            args,
        },
        StatementNode::EffectOp { opcode, args } => Statement::EffectOp { opcode, args },
        StatementNode::Label { name } => Statement::Label { name },
    })
}

/// Convert literal text according to the production that matched it
pub fn build_literal(
    node: &LiteralNode,
    location: &SourceLocation<'_>,
) -> Result<Literal, ConversionError> {
    let fail = |reason: &str| {
        let position = location.byte_to_position(node.span.start);
        ConversionError {
            literal: node.text.clone(),
            line: position.line + 1,
            column: position.column + 1,
            reason: reason.to_string(),
        }
    };

    match node.kind {
        LiteralKind::Int => node.text.parse::<i64>().map(Literal::Int).map_err(|e| {
            match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    fail("integer out of range")
                }
                _ => fail("malformed integer"),
            }
        }),
        LiteralKind::Bool => match node.text.as_str() {
            "true" => Ok(Literal::Bool(true)),
            "false" => Ok(Literal::Bool(false)),
            _ => Err(fail("malformed boolean")),
        },
        LiteralKind::Decimal => match node.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Literal::Float(value)),
            Ok(_) => Err(fail("decimal out of range")),
            Err(_) => Err(fail("malformed decimal")),
        },
    }
}
