mod assignment;
mod clause;
mod clause_list;
mod literal;
mod value;
mod variable_map;

pub use assignment::*;
pub use clause::*;
pub use clause_list::*;
pub use literal::*;
pub use value::*;
pub use variable_map::*;

use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A recoverable failure while translating between variable indices and names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("no variable with index {0}")]
    UnknownIndex(i32),
    #[error("no variable named {0}")]
    UnknownName(String),
    #[error("no variable map attached")]
    MissingVariableMap,
}

impl Problem {
    pub fn severity(&self) -> Severity {
        match self {
            Problem::UnknownIndex(_) | Problem::UnknownName(_) | Problem::MissingVariableMap => {
                Severity::Error
            }
        }
    }
}
