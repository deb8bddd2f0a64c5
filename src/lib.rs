//! Integer encodings of Boolean formulas for SAT solvers: literal lists with their algebra, and
//! the extraction of indexed clause lists from formulas in conjunctive normal form.

pub mod common;
pub mod computation;
pub mod extract;
pub mod formula;
pub mod parser;

pub use common::{
    BooleanAssignment, BooleanClause, BooleanClauseList, BooleanSolution, Literal, Problem,
    Variable, VariableMap,
};
pub use extract::{convert, ToBooleanClauseList};
pub use formula::Formula;
