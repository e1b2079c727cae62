//! Element types of the program model, one file per element

pub mod function;
pub mod literal;
pub mod program;
pub mod statement;
pub mod types;

pub use function::{Arg, Function};
pub use literal::Literal;
pub use program::Program;
pub use statement::Statement;
pub use types::Type;
