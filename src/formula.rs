//! The leaves and connectives needed to describe a formula in conjunctive normal form.

use std::fmt::Display;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    True,
    False,
    Literal { name: String, positive: bool },
    And(Vec<Formula>),
    Or(Vec<Formula>),
}

impl Formula {
    pub fn literal(name: impl Into<String>) -> Self {
        Formula::Literal {
            name: name.into(),
            positive: true,
        }
    }

    pub fn not_literal(name: impl Into<String>) -> Self {
        Formula::Literal {
            name: name.into(),
            positive: false,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Formula::Literal { .. })
    }

    pub fn children(&self) -> &[Formula] {
        match self {
            Formula::And(children) | Formula::Or(children) => children,
            Formula::True | Formula::False | Formula::Literal { .. } => &[],
        }
    }

    /// Names of all variables in order of their first occurrence in a depth first walk.
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names.into_iter().unique().collect()
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Formula::Literal { name, .. } => names.push(name),
            _ => self
                .children()
                .iter()
                .for_each(|child| child.collect_names(names)),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::True => write!(f, "true"),
            Formula::False => write!(f, "false"),
            Formula::Literal { name, positive } => {
                write!(f, "{}{}", if *positive { "" } else { "-" }, name)
            }
            Formula::And(children) => write!(f, "({})", children.iter().join(" & ")),
            Formula::Or(children) => write!(f, "({})", children.iter().join(" | ")),
        }
    }
}
