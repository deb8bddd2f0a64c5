use std::{fmt::Display, marker::PhantomData};

use itertools::Itertools;

use super::{BooleanAssignment, Conjunction, Disjunction, Kind, Plain, Problem, VariableMap};

/// Literals identified by variable name instead of index. Each name occurs once, at the position
/// of its first pair; a repeated name takes the value of its last pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValueAssignment<K: Kind = Plain> {
    values: Vec<(String, bool)>,
    kind: PhantomData<K>,
}

pub type ValueClause = ValueAssignment<Disjunction>;

pub type ValueSolution = ValueAssignment<Conjunction>;

impl<K: Kind> ValueAssignment<K> {
    pub fn new(values: Vec<(String, bool)>) -> Self {
        let mut unique: Vec<(String, bool)> = Vec::with_capacity(values.len());
        for (name, value) in values {
            match unique.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = value,
                None => unique.push((name, value)),
            }
        }
        ValueAssignment {
            values: unique,
            kind: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.iter().find(|&(n, _)| n == name).map(|(_, value)| value)
    }

    pub fn to_kind<O: Kind>(&self) -> ValueAssignment<O> {
        ValueAssignment::new(self.values.clone())
    }

    pub fn to_boolean(&self, variable_map: &VariableMap) -> Result<BooleanAssignment<K>, Problem> {
        variable_map.to_boolean(self)
    }
}

impl<K: Kind> Display for ValueAssignment<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Value{}[{}]",
            K::NAME,
            self.iter()
                .map(|(name, value)| if value {
                    name.to_string()
                } else {
                    format!("-{}", name)
                })
                .join(", ")
        )
    }
}
