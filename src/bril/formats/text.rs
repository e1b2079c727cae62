//! Text form of programs
//!
//! The printer emits the canonical layout:
//!
//! ```text
//! name(a: t, b: t): ret {
//!   dest: type = const literal;
//!   dest: type = opcode arg arg;
//!   opcode arg;
//! label:
//! }
//! ```
//!
//! The argument list is left out entirely when a function has no parameters
//! and the return annotation only appears when there is one. Labels are not
//! indented. Parsing the printed text yields the program that was printed.

use super::{FormatError, Formatter};
use crate::bril::ast::{Arg, Function, Program, Statement, Type};

/// Indentation used for statements unless configured otherwise
pub const DEFAULT_INDENT: &str = "  ";

/// Render a program as text with the default indentation
pub fn print_program(program: &Program) -> String {
    print_program_with_indent(program, DEFAULT_INDENT)
}

pub fn print_program_with_indent(program: &Program, indent: &str) -> String {
    let mut output = String::new();
    for function in &program.functions {
        print_function(&mut output, function, indent);
    }
    output
}

fn print_function(output: &mut String, function: &Function, indent: &str) {
    output.push_str(&function.name);
    if !function.args.is_empty() {
        let args: Vec<String> = function.args.iter().map(arg_to_string).collect();
        output.push_str(&format!("({})", args.join(", ")));
    }
    if let Some(ty) = &function.return_type {
        output.push_str(&format!(": {ty}"));
    }
    output.push_str(" {\n");

    for stmt in &function.body {
        if !stmt.is_label() {
            output.push_str(indent);
        }
        output.push_str(&statement_to_string(stmt));
        output.push('\n');
    }

    output.push_str("}\n");
}

fn arg_to_string(arg: &Arg) -> String {
    format!("{}: {}", arg.name, arg.ty)
}

/// Render one statement without indentation or line break
pub fn statement_to_string(stmt: &Statement) -> String {
    match stmt {
        Statement::ConstDef { dest, ty, value } => {
            format!("{} = const {value};", destination(dest, ty.as_ref()))
        }
        Statement::ValueOp {
            dest,
            ty,
            opcode,
            args,
        } => format!(
            "{} = {};",
            destination(dest, ty.as_ref()),
            operation(opcode, args)
        ),
        Statement::EffectOp { opcode, args } => format!("{};", operation(opcode, args)),
        Statement::Label { name } => format!("{name}:"),
    }
}

fn destination(dest: &str, ty: Option<&Type>) -> String {
    match ty {
        Some(ty) => format!("{dest}: {ty}"),
        None => dest.to_string(),
    }
}

fn operation(opcode: &str, args: &[String]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(opcode);
    parts.extend(args.iter().map(String::as_str));
    parts.join(" ")
}

/// Formatter emitting the text form
#[derive(Debug, Clone)]
pub struct TextFormatter {
    indent: String,
}

impl TextFormatter {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(print_program_with_indent(program, &self.indent))
    }

    fn description(&self) -> &str {
        "Human-editable text form"
    }
}
