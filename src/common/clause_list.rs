use std::{fmt::Display, sync::Arc};

use super::{BooleanClause, Literal, Problem, ValueClause, VariableMap};
use crate::formula::Formula;

/// An ordered list of clauses, optionally tied to the variable map its indices refer to. The map
/// is shared, never owned exclusively by the list.
#[derive(Debug, Clone, Default)]
pub struct BooleanClauseList {
    clauses: Vec<BooleanClause>,
    variable_map: Option<Arc<VariableMap>>,
}

impl BooleanClauseList {
    pub fn new(clauses: Vec<BooleanClause>) -> Self {
        BooleanClauseList {
            clauses,
            variable_map: None,
        }
    }

    pub fn with_variable_map(mut self, variable_map: Arc<VariableMap>) -> Self {
        self.variable_map = Some(variable_map);
        self
    }

    pub fn variable_map(&self) -> Option<&VariableMap> {
        self.variable_map.as_deref()
    }

    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    pub fn iter(&self) -> impl Iterator<Item = &BooleanClause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The number of variables the list ranges over: the highest referenced index, or the size of
    /// the attached map if that is larger.
    pub fn variable_count(&self) -> usize {
        let referenced = self
            .clauses
            .iter()
            .flat_map(|c| c.variables())
            .map(|v| v.index() as usize)
            .max()
            .unwrap_or(0);
        referenced.max(self.variable_map().map_or(0, VariableMap::len))
    }

    /// The clauses matching `predicate`, bound to the same variable map.
    pub fn filter(&self, predicate: impl FnMut(&&BooleanClause) -> bool) -> Self {
        BooleanClauseList {
            clauses: self.clauses.iter().filter(predicate).cloned().collect(),
            variable_map: self.variable_map.clone(),
        }
    }

    fn require_map(&self) -> Result<&VariableMap, Problem> {
        self.variable_map().ok_or(Problem::MissingVariableMap)
    }

    /// Re-index every clause from the attached map into `variable_map`, which is attached to the
    /// result.
    pub fn adapt(&self, variable_map: Arc<VariableMap>) -> Result<Self, Problem> {
        let old = self.require_map()?;
        let clauses = self
            .clauses
            .iter()
            .map(|c| c.adapt(old, &variable_map))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BooleanClauseList::new(clauses).with_variable_map(variable_map))
    }

    pub fn to_value(&self) -> Result<Vec<ValueClause>, Problem> {
        let map = self.require_map()?;
        self.clauses.iter().map(|c| c.to_value(map)).collect()
    }

    /// Build the conjunction of disjunctions this list encodes, naming variables through the
    /// attached map.
    pub fn to_formula(&self) -> Result<Formula, Problem> {
        let map = self.require_map()?;
        let name_of = |lit: Literal| {
            map.name(lit.var())
                .map(|name| Formula::Literal {
                    name: name.to_string(),
                    positive: lit.is_positive(),
                })
                .ok_or(Problem::UnknownIndex(lit.raw()))
        };
        self.clauses
            .iter()
            .map(|c| c.iter().map(&name_of).collect::<Result<Vec<_>, _>>().map(Formula::Or))
            .collect::<Result<Vec<_>, _>>()
            .map(Formula::And)
    }
}

impl FromIterator<BooleanClause> for BooleanClauseList {
    fn from_iter<T: IntoIterator<Item = BooleanClause>>(iter: T) -> Self {
        BooleanClauseList::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BooleanClauseList {
    type Item = &'a BooleanClause;
    type IntoIter = std::slice::Iter<'a, BooleanClause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

/// Writes the list in DIMACS format. Variable names of an attached map are emitted as comments.
impl Display for BooleanClauseList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(map) = self.variable_map() {
            for (variable, name) in map.names() {
                writeln!(f, "c {} {}", variable, name)?;
            }
        }
        writeln!(f, "p cnf {} {}", self.variable_count(), self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause.iter() {
                write!(f, "{} ", lit)?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}
