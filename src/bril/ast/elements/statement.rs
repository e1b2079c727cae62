//! Statement element definition
//!
//! A function body is an ordered instruction stream. Order is meaningful and is
//! preserved exactly by every conversion.

use super::literal::Literal;
use super::types::Type;

/// One entry of a function body
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `dest[: type] = const literal;`
    ConstDef {
        dest: String,
        ty: Option<Type>,
        value: Literal,
    },
    /// `dest[: type] = opcode arg*;`
    ValueOp {
        dest: String,
        ty: Option<Type>,
        opcode: String,
        args: Vec<String>,
    },
    /// `opcode arg*;`
    EffectOp { opcode: String, args: Vec<String> },
    /// `name:`, a jump target rather than an instruction
    Label { name: String },
}

impl Statement {
    pub fn const_def(dest: impl Into<String>, ty: Option<Type>, value: Literal) -> Self {
        Statement::ConstDef {
            dest: dest.into(),
            ty,
            value,
        }
    }

    pub fn value_op<I, S>(
        dest: impl Into<String>,
        ty: Option<Type>,
        opcode: impl Into<String>,
        args: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Statement::ValueOp {
            dest: dest.into(),
            ty,
            opcode: opcode.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn effect_op<I, S>(opcode: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Statement::EffectOp {
            opcode: opcode.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn label(name: impl Into<String>) -> Self {
        Statement::Label { name: name.into() }
    }

    /// The variable this statement defines, if any
    pub fn dest(&self) -> Option<&str> {
        match self {
            Statement::ConstDef { dest, .. } | Statement::ValueOp { dest, .. } => Some(dest),
            Statement::EffectOp { .. } | Statement::Label { .. } => None,
        }
    }

    /// The type annotation on the destination, if any
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Statement::ConstDef { ty, .. } | Statement::ValueOp { ty, .. } => ty.as_ref(),
            Statement::EffectOp { .. } | Statement::Label { .. } => None,
        }
    }

    /// The opcode as it appears in the structured form (`const` for constants)
    pub fn opcode(&self) -> Option<&str> {
        match self {
            Statement::ConstDef { .. } => Some("const"),
            Statement::ValueOp { opcode, .. } | Statement::EffectOp { opcode, .. } => Some(opcode),
            Statement::Label { .. } => None,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Statement::Label { .. })
    }
}
