use bimap::BiMap;
use itertools::Itertools;

use super::{BooleanAssignment, Kind, Literal, Problem, ValueAssignment, Variable};
use crate::formula::Formula;

/// Bidirectional mapping between variable names and their 1-based indices. Indices are handed
/// out consecutively as names are added, so a map never has gaps.
#[derive(Debug, Clone, Default)]
pub struct VariableMap {
    mapping: BiMap<String, Variable>,
}

impl VariableMap {
    pub fn new() -> Self {
        VariableMap {
            mapping: BiMap::new(),
        }
    }

    /// Create a map assigning indices 1.. to the names in iteration order. Repeated names keep
    /// their first index.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut map = VariableMap::new();
        for name in names {
            map.add(name);
        }
        map
    }

    /// Create a map over the variables of a formula in order of their first occurrence.
    pub fn of(formula: &Formula) -> Self {
        Self::from_names(formula.variable_names())
    }

    /// Add a variable unless it is already known and return its index.
    pub fn add(&mut self, name: impl Into<String>) -> Variable {
        let name = name.into();
        if let Some(&variable) = self.mapping.get_by_left(&name) {
            return variable;
        }
        let index = u32::try_from(self.mapping.len() + 1).expect("too many variables");
        let variable = Variable::from(index);
        self.mapping.insert(name, variable);
        variable
    }

    pub fn index(&self, name: &str) -> Option<Variable> {
        self.mapping.get_by_left(name).copied()
    }

    pub fn name(&self, variable: Variable) -> Option<&str> {
        self.mapping.get_by_right(&variable).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mapping.contains_left(name)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// All variables ordered by index.
    pub fn names(&self) -> impl Iterator<Item = (Variable, &str)> + '_ {
        self.mapping
            .iter()
            .map(|(name, &variable)| (variable, name.as_str()))
            .sorted_by_key(|&(variable, _)| variable)
    }

    /// The same names with indices reassigned in lexicographic order.
    pub fn sorted(&self) -> Self {
        Self::from_names(self.mapping.left_values().sorted())
    }

    pub fn to_value<K: Kind>(
        &self,
        assignment: &BooleanAssignment<K>,
    ) -> Result<ValueAssignment<K>, Problem> {
        assignment
            .iter()
            .map(|lit| {
                self.name(lit.var())
                    .map(|name| (name.to_string(), lit.is_positive()))
                    .ok_or(Problem::UnknownIndex(lit.raw()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ValueAssignment::new)
    }

    pub fn to_boolean<K: Kind>(
        &self,
        assignment: &ValueAssignment<K>,
    ) -> Result<BooleanAssignment<K>, Problem> {
        assignment
            .iter()
            .map(|(name, value)| {
                self.index(name)
                    .map(|variable| Literal::new(variable, value))
                    .ok_or_else(|| Problem::UnknownName(name.to_string()))
            })
            .collect()
    }
}
