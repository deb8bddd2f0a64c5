use std::{collections::BTreeMap, fmt::Display, hash::Hash, marker::PhantomData};

use fxhash::FxHashSet;
use itertools::Itertools;

use super::{Literal, Problem, ValueAssignment, Variable, VariableMap};

/// The interpretation of a list of literals. All kinds share the same storage, only the meaning
/// of the list changes.
pub trait Kind: std::fmt::Debug + Clone + Copy + Default + PartialEq + Eq + Hash {
    const NAME: &'static str;
}

/// A plain set of literals without a logical connective attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Plain;

/// The literals are in disjunction. The empty disjunction is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Disjunction;

/// The literals are in conjunction. The empty conjunction is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Conjunction;

impl Kind for Plain {
    const NAME: &'static str = "Assignment";
}

impl Kind for Disjunction {
    const NAME: &'static str = "Clause";
}

impl Kind for Conjunction {
    const NAME: &'static str = "Solution";
}

/// A list of literals referring to variables of some variable map that is not stored alongside.
/// Literals may repeat and may contradict each other until [`BooleanAssignment::clean`] is called.
/// Every transformation returns a new list and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BooleanAssignment<K: Kind = Plain> {
    literals: Vec<Literal>,
    kind: PhantomData<K>,
}

/// A disjunction of literals.
pub type BooleanClause = BooleanAssignment<Disjunction>;

/// A conjunction of literals, i.e. a (partial) valuation of the variables.
pub type BooleanSolution = BooleanAssignment<Conjunction>;

impl<K: Kind> BooleanAssignment<K> {
    pub fn new(literals: Vec<Literal>) -> Self {
        BooleanAssignment {
            literals,
            kind: PhantomData,
        }
    }

    /// Create the empty list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Concatenate the literals of all assignments, dropping repeated values. Contradicting
    /// literals are kept, call [`BooleanAssignment::clean`] afterwards to detect them.
    pub fn merge<'a>(assignments: impl IntoIterator<Item = &'a Self>) -> Self
    where
        K: 'a,
    {
        let mut seen = FxHashSet::default();
        assignments
            .into_iter()
            .flat_map(|a| a.literals.iter().copied())
            .filter(|&lit| seen.insert(lit))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// The variable of every literal in storage order, repeated variables included.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals.iter().map(|lit| lit.var())
    }

    /// How many of the given literals occur negated in this assignment.
    pub fn count_conflicts(&self, literals: &[Literal]) -> usize {
        let own: FxHashSet<Literal> = self.literals.iter().copied().collect();
        literals.iter().filter(|&&lit| own.contains(&-lit)).count()
    }

    pub fn count_conflicts_with<O: Kind>(&self, other: &BooleanAssignment<O>) -> usize {
        self.count_conflicts(&other.literals)
    }

    pub fn conflicts_with<O: Kind>(&self, other: &BooleanAssignment<O>) -> bool {
        self.count_conflicts_with(other) > 0
    }

    /// Flip the sign of every literal, keeping length and order.
    pub fn negate(&self) -> Self {
        self.literals.iter().map(|&lit| -lit).collect()
    }

    /// Remove repeated literals. Returns `None` if the assignment contains a literal together
    /// with its negation.
    pub fn clean(&self) -> Option<Self> {
        let mut seen = FxHashSet::default();
        let mut unique = Vec::with_capacity(self.literals.len());
        for &lit in &self.literals {
            if seen.contains(&-lit) {
                return None;
            }
            if seen.insert(lit) {
                unique.push(lit);
            }
        }
        Some(Self::new(unique))
    }

    /// Translate the literals from the indices of `old` to the indices of `new` by going through
    /// the variable names. Signs are kept. Fails on the first literal that cannot be translated.
    pub fn adapt(&self, old: &VariableMap, new: &VariableMap) -> Result<Self, Problem> {
        self.literals
            .iter()
            .map(|&lit| -> Result<Literal, Problem> {
                let name = old
                    .name(lit.var())
                    .ok_or(Problem::UnknownIndex(lit.raw()))?;
                let variable = new
                    .index(name)
                    .ok_or_else(|| Problem::UnknownName(name.to_string()))?;
                Ok(Literal::new(variable, lit.is_positive()))
            })
            .collect()
    }

    pub fn contains_any_variable(&self, variables: &[Variable]) -> bool {
        variables
            .iter()
            .any(|&var| self.index_of_variable(var).is_some())
    }

    /// Note: despite its name this is only true if *none* of `variables` occur in the
    /// assignment. Use `!contains_any_variable` for the same check with a clearer name.
    pub fn contains_all_variables(&self, variables: &[Variable]) -> bool {
        variables
            .iter()
            .all(|&var| self.index_of_variable(var).is_none())
    }

    /// Position of the first literal over `variable`, regardless of its sign.
    pub fn index_of_variable(&self, variable: Variable) -> Option<usize> {
        self.literals.iter().position(|lit| lit.var() == variable)
    }

    /// The value of the first literal over `variable`.
    pub fn get_value(&self, variable: Variable) -> Option<bool> {
        self.index_of_variable(variable)
            .map(|i| self.literals[i].is_positive())
    }

    fn partition_variables(&self, variables: &[Variable]) -> (Self, Self) {
        let variables: FxHashSet<Variable> = variables.iter().copied().collect();
        let (matching, rest): (Vec<Literal>, Vec<Literal>) = self
            .literals
            .iter()
            .partition(|lit| variables.contains(&lit.var()));
        (Self::new(matching), Self::new(rest))
    }

    /// Drop every literal over one of `variables`, keeping the order of the others.
    pub fn remove_all_variables(&self, variables: &[Variable]) -> Self {
        self.partition_variables(variables).1
    }

    /// Keep only the literals over one of `variables`, in their original order.
    pub fn retain_all_variables(&self, variables: &[Variable]) -> Self {
        self.partition_variables(variables).0
    }

    pub fn to_assignment(&self) -> BooleanAssignment {
        self.to_kind()
    }

    pub fn to_clause(&self) -> BooleanClause {
        self.to_kind()
    }

    pub fn to_solution(&self) -> BooleanSolution {
        self.to_kind()
    }

    /// Reinterpret the same literals under a different connective. Nothing is validated.
    pub fn to_kind<O: Kind>(&self) -> BooleanAssignment<O> {
        BooleanAssignment::new(self.literals.clone())
    }

    pub fn into_kind<O: Kind>(self) -> BooleanAssignment<O> {
        BooleanAssignment::new(self.literals)
    }

    /// Resolve every literal back to its variable name.
    pub fn to_value(&self, variable_map: &VariableMap) -> Result<ValueAssignment<K>, Problem> {
        variable_map.to_value(self)
    }

    /// The value of every variable in the assignment. If a variable occurs more than once the
    /// literal stored last decides its value.
    pub fn get_all(&self) -> BTreeMap<Variable, bool> {
        let mut values = BTreeMap::new();
        for lit in &self.literals {
            values.insert(lit.var(), lit.is_positive());
        }
        values
    }
}

impl<K: Kind> FromIterator<Literal> for BooleanAssignment<K> {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<K: Kind, const N: usize> From<[i32; N]> for BooleanAssignment<K> {
    fn from(value: [i32; N]) -> Self {
        value.into_iter().map(Literal::from).collect()
    }
}

impl<K: Kind> From<&[i32]> for BooleanAssignment<K> {
    fn from(value: &[i32]) -> Self {
        value.iter().map(|&i| Literal::from(i)).collect()
    }
}

impl<K: Kind> Display for BooleanAssignment<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Boolean{}[{}]", K::NAME, self.literals.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(raw: &[i32]) -> Vec<Literal> {
        raw.iter().map(|&i| Literal::from(i)).collect()
    }

    fn vars(raw: &[u32]) -> Vec<Variable> {
        raw.iter().map(|&i| Variable::from(i)).collect()
    }

    #[test]
    fn negate_flips_every_sign() {
        let a = BooleanAssignment::<Plain>::from([1, -2, 3]);
        assert_eq!(a.negate().literals(), lits(&[-1, 2, -3]));
        assert_eq!(a.negate().negate(), a);
    }

    #[test]
    fn clean_detects_contradiction() {
        assert_eq!(BooleanClause::from([1, -1]).clean(), None);
        assert_eq!(BooleanClause::from([2, 3, -2]).clean(), None);
    }

    #[test]
    fn clean_collapses_duplicates_in_order() {
        let cleaned = BooleanClause::from([1, 2, 1]).clean().unwrap();
        assert_eq!(cleaned.literals(), lits(&[1, 2]));
        assert_eq!(BooleanClause::empty().clean(), Some(BooleanClause::empty()));
    }

    #[test]
    fn merge_keeps_first_occurrence() {
        let a = BooleanAssignment::<Plain>::from([1, -2]);
        let b = BooleanAssignment::from([-2, 3, -1]);
        let merged = BooleanAssignment::merge([&a, &b]);
        assert_eq!(merged.literals(), lits(&[1, -2, 3, -1]));
        assert_eq!(BooleanAssignment::merge([&a, &a]), a);
    }

    #[test]
    fn conflicts() {
        let a = BooleanSolution::from([1, -2, 3]);
        let b = BooleanSolution::from([-1, -2, -3, 4]);
        assert_eq!(a.count_conflicts_with(&b), 2);
        assert!(a.conflicts_with(&b));
        assert!(!a.conflicts_with(&BooleanSolution::from([1, 4])));
        assert_eq!(a.count_conflicts_with(&a.negate()), 3);
    }

    #[test]
    fn remove_and_retain() {
        let a = BooleanAssignment::<Plain>::from([1, -2, 3]);
        assert_eq!(a.remove_all_variables(&vars(&[2])).literals(), lits(&[1, 3]));
        assert_eq!(a.retain_all_variables(&vars(&[2])).literals(), lits(&[-2]));
        assert_eq!(a.retain_all_variables(&vars(&[4])), BooleanAssignment::empty());
    }

    #[test]
    fn variable_lookup() {
        let a = BooleanAssignment::<Plain>::from([1, -2, 3, 2]);
        assert_eq!(a.index_of_variable(Variable::from(2)), Some(1));
        assert_eq!(a.index_of_variable(Variable::from(5)), None);
        assert_eq!(a.get_value(Variable::from(2)), Some(false));
        assert!(a.contains_any_variable(&vars(&[5, 3])));
        assert!(!a.contains_any_variable(&vars(&[5])));
    }

    #[test]
    fn contains_all_variables_means_none_occur() {
        let a = BooleanAssignment::<Plain>::from([1, -2]);
        assert!(!a.contains_all_variables(&vars(&[1, 2])));
        assert!(!a.contains_all_variables(&vars(&[1, 5])));
        assert!(a.contains_all_variables(&vars(&[4, 5])));
    }

    #[test]
    fn get_all_last_literal_wins() {
        let all = BooleanAssignment::<Plain>::from([1, -2, -1]).get_all();
        assert_eq!(all.get(&Variable::from(1)), Some(&false));
        assert_eq!(all.get(&Variable::from(2)), Some(&false));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn views_share_literals() {
        let clause = BooleanClause::from([1, -2]);
        let solution = clause.to_solution();
        assert_eq!(solution.literals(), clause.literals());
        assert_eq!(solution.to_clause(), clause);
        assert_eq!(clause.to_string(), "BooleanClause[1, -2]");
        assert_eq!(solution.to_string(), "BooleanSolution[1, -2]");
        assert_eq!(clause.to_assignment().to_string(), "BooleanAssignment[1, -2]");
    }

    #[test]
    fn adapt_between_maps() {
        let old = VariableMap::from_names(["a", "b", "c"]);
        let new = VariableMap::from_names(["c", "a", "b"]);
        let a = BooleanAssignment::<Plain>::from([1, -2, 3]);
        let adapted = a.adapt(&old, &new).unwrap();
        assert_eq!(adapted.literals(), lits(&[2, -3, 1]));
        assert_eq!(a.adapt(&old, &old).unwrap(), a);
    }

    #[test]
    fn adapt_reports_missing_variables() {
        let old = VariableMap::from_names(["a", "b"]);
        let new = VariableMap::from_names(["a"]);
        let a = BooleanAssignment::<Plain>::from([1, -2]);
        assert_eq!(
            a.adapt(&old, &new),
            Err(Problem::UnknownName("b".to_string()))
        );
        let b = BooleanAssignment::<Plain>::from([-3]);
        let err = b.adapt(&old, &new).unwrap_err();
        assert_eq!(err, Problem::UnknownIndex(-3));
        assert_eq!(err.to_string(), "no variable with index -3");
    }
}
