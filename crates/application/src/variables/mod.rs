//! Placeholder scanning for `{{variable}}` syntax.

mod parser;

pub use parser::{VariableReference, parse_variables};
