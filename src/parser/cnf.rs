use std::{collections::BTreeMap, sync::Arc};

use anyhow::{anyhow, bail, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending},
    sequence::tuple,
    IResult, Parser,
};
use tracing::{debug, warn};

use super::{parse_clause, parse_i32};
use crate::common::{BooleanClause, BooleanClauseList, VariableMap};

/// Variables beyond this count are refused, since every one of them gets a name in the map.
pub const MAX_VARIABLES: usize = 1 << 24;

pub struct Header {
    pub vars: usize,
    pub clauses: usize,
}

fn parse_header(input: &str) -> IResult<&str, Header> {
    let (input, _) =
        tuple((multispace0, tag("p"), multispace1, tag("cnf"), multispace1)).parse(input)?;
    let (input, (vars, _, clauses)) = tuple((parse_i32, multispace1, parse_i32)).parse(input)?;
    Ok((
        input,
        Header {
            vars: vars.max(0) as usize,
            clauses: clauses.max(0) as usize,
        },
    ))
}

/// A comment of the form `c <index> <name>`.
fn parse_name(input: &str) -> IResult<&str, (i32, &str)> {
    let (input, (_, _, index, _, name)) = tuple((
        tag("c"),
        multispace1,
        parse_i32,
        multispace1,
        not_line_ending,
    ))
    .parse(input)?;
    Ok((input, (index, name.trim())))
}

/// Parse a DIMACS file. Variables named in comments keep their names, all others are named by
/// their index.
pub fn parse(input: &str) -> Result<BooleanClauseList> {
    debug!("parsing cnf");
    let mut names = BTreeMap::new();
    let mut header = None;
    let mut clauses: Vec<BooleanClause> = Vec::new();

    for line in input.lines().map(str::trim).filter(|s| !s.is_empty()) {
        if line.starts_with('c') {
            if let Ok((_, (index, name))) = parse_name(line) {
                if index > 0 && !name.is_empty() {
                    names.insert(index as usize, name.to_string());
                }
            }
        } else if header.is_none() {
            let (_, h) = parse_header(line).map_err(|_| anyhow!("invalid dimacs header"))?;
            debug!("{} variables and {} clauses", h.vars, h.clauses);
            header = Some(h);
        } else {
            let (_, clause) = parse_clause(line).map_err(|_| anyhow!("invalid clause '{}'", line))?;
            clauses.push(clause);
        }
    }

    let header = header.ok_or(anyhow!("empty input"))?;
    if header.clauses != clauses.len() {
        warn!(
            "header announces {} clauses but {} were found",
            header.clauses,
            clauses.len()
        );
    }

    let vars = clauses
        .iter()
        .flat_map(|c| c.variables())
        .map(|v| v.index() as usize)
        .chain(names.keys().copied())
        .max()
        .unwrap_or(0)
        .max(header.vars);
    if vars > MAX_VARIABLES {
        bail!(
            "{} variables exceed the supported maximum of {}",
            vars,
            MAX_VARIABLES
        );
    }
    let variable_map = VariableMap::from_names((1..=vars).map(|i| match names.get(&i) {
        Some(name) => name.clone(),
        None => i.to_string(),
    }));
    if variable_map.len() != vars {
        bail!("variable names are not unique");
    }

    Ok(BooleanClauseList::new(clauses).with_variable_map(Arc::new(variable_map)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Variable;

    #[test]
    fn named_variables() {
        let input = "c 1 a\nc 3 c\nc comment\np cnf 3 2\n1 -2 0\n-3 0\n";
        let list = parse(input).unwrap();
        assert_eq!(
            list.clauses(),
            [BooleanClause::from([1, -2]), BooleanClause::from([-3])]
        );
        let map = list.variable_map().unwrap();
        assert_eq!(map.name(Variable::from(1)), Some("a"));
        assert_eq!(map.name(Variable::from(2)), Some("2"));
        assert_eq!(map.name(Variable::from(3)), Some("c"));
    }

    #[test]
    fn writes_back_what_it_reads() {
        let input = "c 1 a\nc 2 b\np cnf 2 2\n1 -2 0\n2 0\n";
        assert_eq!(parse(input).unwrap().to_string(), input);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("").is_err());
        assert!(parse("p dnf 1 1\n1 0\n").is_err());
        assert!(parse("p cnf 1 1\n1 x 0\n").is_err());
        assert!(parse("c 1 x\nc 2 x\np cnf 2 0\n").is_err());
    }

    #[test]
    fn refuses_huge_variable_counts() {
        assert!(parse("p cnf 2000000000 0\n").is_err());
        assert!(parse("p cnf 1 1\n2000000000 0\n").is_err());
        assert!(parse("c 2000000000 big\np cnf 1 0\n").is_err());
        let list = parse("p cnf 16 0\n").unwrap();
        assert_eq!(list.variable_map().map(VariableMap::len), Some(16));
    }

    #[test]
    fn variables_beyond_header() {
        let list = parse("p cnf 1 1\n4 0\n").unwrap();
        assert_eq!(list.variable_map().map(VariableMap::len), Some(4));
    }
}
