pub mod cnf;

use anyhow::{anyhow, bail, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{pair, terminated},
    IResult, Parser,
};

use crate::common::{BooleanClause, Literal};

fn parse_i32(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(tag("-")), digit1)), str::parse).parse(input)
}

/// A single `0`-terminated clause filling the whole line.
fn parse_clause(input: &str) -> IResult<&str, BooleanClause> {
    all_consuming(terminated(
        map_res(
            pair(multispace0, separated_list1(multispace1, parse_i32)),
            |(_, ids)| match ids.split_last() {
                Some((0, rest)) => rest
                    .iter()
                    .map(|&i| {
                        Literal::try_from_raw(i).ok_or_else(|| anyhow!("invalid literal {}", i))
                    })
                    .collect::<Result<BooleanClause>>(),
                _ => bail!("invalid clause '{}'", input),
            },
        ),
        multispace0,
    ))
    .parse(input)
}
