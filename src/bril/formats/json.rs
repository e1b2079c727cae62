//! Structured document form of programs
//!
//! The document shape is:
//!
//! ```text
//! Program   = { "functions": [Function] }
//! Function  = { "args": [Arg], "instrs": [Instr], "name": string, "type"?: Type }
//! Arg       = { "name": string, "type": Type }
//! Instr     = { "dest": string, "op": "const", "type"?: Type, "value": Literal }
//!           | { "args": [string], "dest": string, "op": string, "type"?: Type }
//!           | { "args": [string], "op": string }
//!           | { "label": string }
//! Type      = string | { "ptr": Type }
//! Literal   = integer | boolean | number
//! ```
//!
//! The wire structs below declare their fields in alphabetical order, so the
//! encoder always emits sorted keys. Optional fields are left out rather than
//! written as `null`.

use super::{FormatError, Formatter};
use crate::bril::ast::{Arg, Function, Literal, Program, Statement, Type};
use crate::bril::error::DecodeError;
use serde::{Deserialize, Serialize};

/// Encode a program as a JSON document
pub fn to_json(program: &Program, pretty: bool) -> Result<String, serde_json::Error> {
    let repr = ProgramRepr::from(program);
    if pretty {
        serde_json::to_string_pretty(&repr)
    } else {
        serde_json::to_string(&repr)
    }
}

/// Decode a JSON document into a program
///
/// Pointer types nest without a depth limit, so serde_json's recursion guard
/// is off and deep documents grow the stack on demand instead.
pub fn from_json(document: &str) -> Result<Program, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_str(document);
    deserializer.disable_recursion_limit();
    let repr = ProgramRepr::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    repr.try_into()
}

/// Formatter emitting the JSON document
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        to_json(program, self.pretty).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Canonical JSON document with sorted keys"
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProgramRepr {
    functions: Vec<FunctionRepr>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FunctionRepr {
    #[serde(default)]
    args: Vec<ArgRepr>,
    instrs: Vec<InstrRepr>,
    name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    ty: Option<TypeRepr>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArgRepr {
    name: String,
    #[serde(rename = "type")]
    ty: TypeRepr,
}

/// Union of every instruction field; which ones are present decides the kind
#[derive(Debug, Default, Serialize, Deserialize)]
struct InstrRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    op: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    ty: Option<TypeRepr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<LiteralRepr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TypeRepr {
    Base(String),
    Pointer { ptr: Box<TypeRepr> },
}

/// Tried in order: integer, then boolean, then any other number
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum LiteralRepr {
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl From<&Program> for ProgramRepr {
    fn from(program: &Program) -> Self {
        Self {
            functions: program.functions.iter().map(FunctionRepr::from).collect(),
        }
    }
}

impl From<&Function> for FunctionRepr {
    fn from(function: &Function) -> Self {
        Self {
            args: function.args.iter().map(ArgRepr::from).collect(),
            instrs: function.body.iter().map(InstrRepr::from).collect(),
            name: function.name.clone(),
            ty: function.return_type.as_ref().map(TypeRepr::from),
        }
    }
}

impl From<&Arg> for ArgRepr {
    fn from(arg: &Arg) -> Self {
        Self {
            name: arg.name.clone(),
            ty: TypeRepr::from(&arg.ty),
        }
    }
}

impl From<&Statement> for InstrRepr {
    fn from(stmt: &Statement) -> Self {
        let mut repr = Self {
            dest: stmt.dest().map(str::to_string),
            op: stmt.opcode().map(str::to_string),
            ty: stmt.ty().map(TypeRepr::from),
            ..Self::default()
        };
        match stmt {
            Statement::ConstDef { value, .. } => repr.value = Some(LiteralRepr::from(*value)),
            Statement::ValueOp { args, .. } | Statement::EffectOp { args, .. } => {
                repr.args = Some(args.clone())
            }
            Statement::Label { name } => repr.label = Some(name.clone()),
        }
        repr
    }
}

impl From<&Type> for TypeRepr {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Base(name) => TypeRepr::Base(name.clone()),
            Type::Pointer(inner) => TypeRepr::Pointer {
                ptr: Box::new(TypeRepr::from(inner.as_ref())),
            },
        }
    }
}

impl From<Literal> for LiteralRepr {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Int(value) => LiteralRepr::Int(value),
            Literal::Bool(value) => LiteralRepr::Bool(value),
            Literal::Float(value) => LiteralRepr::Float(value),
        }
    }
}

impl TryFrom<ProgramRepr> for Program {
    type Error = DecodeError;

    fn try_from(repr: ProgramRepr) -> Result<Self, Self::Error> {
        let functions = repr
            .functions
            .into_iter()
            .map(Function::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Program { functions })
    }
}

impl TryFrom<FunctionRepr> for Function {
    type Error = DecodeError;

    fn try_from(repr: FunctionRepr) -> Result<Self, Self::Error> {
        let mut body = Vec::with_capacity(repr.instrs.len());
        for (index, instr) in repr.instrs.into_iter().enumerate() {
            let stmt = instr
                .into_statement()
                .map_err(|reason| DecodeError::Instruction {
                    function: repr.name.clone(),
                    index,
                    reason,
                })?;
            body.push(stmt);
        }

        Ok(Function {
            name: repr.name,
            args: repr
                .args
                .into_iter()
                .map(|arg| Arg::new(arg.name, arg.ty.into()))
                .collect(),
            return_type: repr.ty.map(Type::from),
            body,
        })
    }
}

impl InstrRepr {
    /// Classify the instruction by which fields it carries
    ///
    /// Fields that have no meaning for the resulting statement are rejected
    /// rather than dropped.
    fn into_statement(self) -> Result<Statement, String> {
        let InstrRepr {
            args,
            dest,
            label,
            op,
            ty,
            value,
        } = self;

        if let Some(name) = label {
            let stray = [
                ("args", args.is_some()),
                ("dest", dest.is_some()),
                ("op", op.is_some()),
                ("type", ty.is_some()),
                ("value", value.is_some()),
            ]
            .into_iter()
            .find_map(|(field, present)| present.then_some(field));
            return match stray {
                Some(field) => Err(format!("label `{name}` cannot have field `{field}`")),
                None => Ok(Statement::Label { name }),
            };
        }

        let op = op.ok_or_else(|| "missing field `op`".to_string())?;
        let ty = ty.map(Type::from);
        match (dest, value) {
            (Some(dest), Some(value)) if op == "const" => match args {
                Some(_) => Err("constant cannot have field `args`".to_string()),
                None => Ok(Statement::ConstDef {
                    dest,
                    ty,
                    value: value.into(),
                }),
            },
            (None, Some(_)) if op == "const" => {
                Err("constant is missing field `dest`".to_string())
            }
            (_, Some(_)) => Err(format!("operation `{op}` cannot have field `value`")),
            (Some(dest), None) => Ok(Statement::ValueOp {
                dest,
                ty,
                opcode: op,
                args: args.unwrap_or_default(),
            }),
            (None, None) if ty.is_some() => Err(format!(
                "operation `{op}` has a `type` but no `dest`"
            )),
            (None, None) => Ok(Statement::EffectOp {
                opcode: op,
                args: args.unwrap_or_default(),
            }),
        }
    }
}

impl From<TypeRepr> for Type {
    fn from(repr: TypeRepr) -> Self {
        match repr {
            TypeRepr::Base(name) => Type::Base(name),
            TypeRepr::Pointer { ptr } => Type::Pointer(Box::new(Type::from(*ptr))),
        }
    }
}

impl From<LiteralRepr> for Literal {
    fn from(repr: LiteralRepr) -> Self {
        match repr {
            LiteralRepr::Int(value) => Literal::Int(value),
            LiteralRepr::Bool(value) => Literal::Bool(value),
            LiteralRepr::Float(value) => Literal::Float(value),
        }
    }
}
