pub use crate::diagnostics::{ErrorContext, ErrorType, TriStateError};
pub use crate::tristate::{classify, parse, parse_token, CaseFold, TriState};
pub use crate::value::Value;

pub mod cli;
pub mod diagnostics;
pub mod tristate;
pub mod value;
