use anyhow::{anyhow, Result};
use boolclause::{
    computation::{self, Computation},
    parser, ToBooleanClauseList,
};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
pub struct Flags {
    #[arg(short, long)]
    /// Reassign variable indices in lexicographic order of the variable names.
    sort_names: bool,
    #[arg(short, long)]
    /// Drop clauses that contain a literal together with its negation.
    clean: bool,
    cnf: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();
    let flags = Flags::parse();

    let input = parser::cnf::parse(&std::fs::read_to_string(&flags.cnf)?)?;
    let variable_map = input
        .variable_map()
        .ok_or(anyhow!("parsed cnf has no variable map"))?;
    let variable_map = if flags.sort_names {
        variable_map.sorted()
    } else {
        variable_map.clone()
    };
    let formula = input.to_formula()?;

    let extracted = ToBooleanClauseList::with_variable_map(
        computation::of(formula),
        computation::of(variable_map),
    )
    .compute()?;

    let output = if flags.clean {
        let before = extracted.len();
        let kept = extracted.filter(|clause| clause.clean().is_some());
        tracing::info!("dropped {} tautological clauses", before - kept.len());
        kept
    } else {
        extracted
    };

    print!("{}", output);
    Ok(())
}
