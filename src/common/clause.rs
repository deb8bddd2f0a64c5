use fxhash::FxHashSet;
use itertools::Itertools;

use super::{BooleanClause, BooleanClauseList, BooleanSolution, Literal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Unit(Literal),
    True,
    False,
    Unknown,
}

impl BooleanClause {
    /// Given a (partial) solution, give an evaluation of the clause. If a unit is encountered,
    /// return the unknown literal.
    pub fn evaluate(&self, solution: &BooleanSolution) -> Evaluation {
        let assigned: FxHashSet<Literal> = solution.iter().collect();
        let mut distinct = 0;
        let mut falsified = 0;
        let mut last_unknown = None;
        for lit in self.iter().unique() {
            if assigned.contains(&lit) {
                return Evaluation::True;
            }
            distinct += 1;
            if assigned.contains(&-lit) {
                falsified += 1;
            } else {
                last_unknown = Some(lit);
            }
        }

        match last_unknown {
            None => Evaluation::False,
            Some(lit) if falsified + 1 == distinct => Evaluation::Unit(lit),
            Some(_) => Evaluation::Unknown,
        }
    }

    // Returns true if only a single literal is true or unknown in the clause.
    pub fn is_unit(&self, solution: &BooleanSolution) -> bool {
        let assigned: FxHashSet<Literal> = solution.iter().collect();
        self.iter()
            .unique()
            .filter(|lit| !assigned.contains(&-*lit))
            .count()
            == 1
    }

    /// Create a new clause which is the resolvent of self and other on the provided literal.
    /// This does not check if self contains the literal and other contains the negated literal.
    pub fn resolve(&self, other: &BooleanClause, literal: Literal) -> Self {
        self.iter()
            .filter(|&lit| lit != literal)
            .chain(other.iter().filter(|&lit| lit != -literal))
            .unique()
            .collect()
    }
}

impl BooleanSolution {
    /// True if every clause of the list has a literal contained in this solution.
    pub fn satisfies(&self, clauses: &BooleanClauseList) -> bool {
        clauses
            .iter()
            .all(|clause| clause.evaluate(self) == Evaluation::True)
    }
}
