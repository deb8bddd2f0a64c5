//! Transforms a formula in conjunctive normal form into an indexed clause list.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::{debug, trace};

use crate::{
    common::{BooleanClause, BooleanClauseList, Literal, VariableMap},
    computation::{self, Computation, Constant},
    formula::Formula,
};

/// Extraction of a clause list from a CNF formula and the variable map its names are resolved
/// against. A given map is computed concurrently with the formula; without one, the map is
/// derived from the formula once it is available.
#[derive(Debug, Clone)]
pub struct ToBooleanClauseList<F, M = Constant<VariableMap>> {
    formula: F,
    variable_map: Option<M>,
}

impl<F> ToBooleanClauseList<F>
where
    F: Computation<Output = Formula>,
{
    /// Use a variable map over exactly the variables of the formula.
    pub fn new(formula: F) -> Self {
        ToBooleanClauseList {
            formula,
            variable_map: None,
        }
    }
}

impl<F, M> ToBooleanClauseList<F, M>
where
    F: Computation<Output = Formula>,
    M: Computation<Output = VariableMap>,
{
    pub fn with_variable_map(formula: F, variable_map: M) -> Self {
        ToBooleanClauseList {
            formula,
            variable_map: Some(variable_map),
        }
    }
}

impl<F, M> Computation for ToBooleanClauseList<F, M>
where
    F: Computation<Output = Formula>,
    M: Computation<Output = VariableMap>,
{
    type Output = BooleanClauseList;

    fn compute(self) -> Result<BooleanClauseList> {
        match self.variable_map {
            Some(variable_map) => self
                .formula
                .join(variable_map)
                .then(|(formula, variable_map)| extract(&formula, Arc::new(variable_map)))
                .compute(),
            None => self
                .formula
                .then(|formula| {
                    let variable_map = VariableMap::of(&formula);
                    extract(&formula, Arc::new(variable_map))
                })
                .compute(),
        }
    }
}

/// Convert a CNF formula, deriving the variable map from the formula if none is given.
pub fn convert(formula: &Formula, variable_map: Option<&VariableMap>) -> Result<BooleanClauseList> {
    match variable_map {
        Some(map) => ToBooleanClauseList::with_variable_map(
            computation::of(formula.clone()),
            computation::of(map.clone()),
        )
        .compute(),
        None => ToBooleanClauseList::new(computation::of(formula.clone())).compute(),
    }
}

fn extract(formula: &Formula, variable_map: Arc<VariableMap>) -> Result<BooleanClauseList> {
    let clauses = match formula {
        Formula::And(children) => children
            .iter()
            .filter_map(|child| clause(child, &variable_map).transpose())
            .collect::<Result<Vec<_>>>()?,
        Formula::True => vec![],
        Formula::False => vec![BooleanClause::empty()],
        Formula::Literal { .. } | Formula::Or(_) => {
            clause(formula, &variable_map)?.into_iter().collect()
        }
    };
    debug!(
        "extracted {} clauses over {} variables",
        clauses.len(),
        variable_map.len()
    );
    Ok(BooleanClauseList::new(clauses).with_variable_map(variable_map))
}

/// Resolve a literal through the map. A missing name means the map does not belong to the
/// formula, which aborts the whole extraction.
fn literal(name: &str, positive: bool, variable_map: &VariableMap) -> Result<Literal> {
    variable_map
        .index(name)
        .map(|variable| Literal::new(variable, positive))
        .ok_or_else(|| anyhow!("variable {} is not part of the variable map", name))
}

/// The clause for one child of the top level conjunction, or `None` if the child is a
/// tautology.
fn clause(formula: &Formula, variable_map: &VariableMap) -> Result<Option<BooleanClause>> {
    match formula {
        Formula::Literal { name, positive } => Ok(Some(
            [literal(name, *positive, variable_map)?].into_iter().collect(),
        )),
        _ => {
            let children = formula.children();
            if children.iter().any(|child| *child == Formula::True) {
                trace!("dropping tautological clause {}", formula);
                return Ok(None);
            }
            children
                .iter()
                .filter_map(|child| match child {
                    Formula::Literal { name, positive } => {
                        Some(literal(name, *positive, variable_map))
                    }
                    _ => None,
                })
                .collect::<Result<BooleanClause>>()
                .map(Some)
        }
    }
}
