//! Function and argument element definitions

use super::statement::Statement;
use super::types::Type;

/// A named function with its signature and instruction stream
///
/// `return_type` of `None` means the function returns nothing. That is the
/// only spelling of "void": the printer emits no annotation for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub args: Vec<Arg>,
    pub return_type: Option<Type>,
    pub body: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.args.push(Arg::new(name, ty));
        self
    }

    pub fn with_return_type(mut self, ty: Type) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = body;
        self
    }
}

/// A formal parameter; arguments always carry a type
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub name: String,
    pub ty: Type,
}

impl Arg {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
