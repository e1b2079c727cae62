//! Program element definition

use super::function::Function;

/// An ordered sequence of functions
///
/// Function names are not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: Vec<Function>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_functions(functions: Vec<Function>) -> Self {
        Self { functions }
    }

}
