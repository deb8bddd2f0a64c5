use boolclause::{
    computation::{self, Computation},
    parser, BooleanClause, Formula, ToBooleanClauseList, VariableMap,
};

fn cnf() -> Formula {
    Formula::And(vec![
        Formula::Or(vec![
            Formula::literal("A"),
            Formula::literal("B"),
            Formula::literal("C"),
        ]),
        Formula::Or(vec![
            Formula::not_literal("A"),
            Formula::not_literal("B"),
            Formula::not_literal("C"),
        ]),
    ])
}

#[test]
fn two_clauses_over_three_variables() {
    let map = VariableMap::from_names(["A", "B", "C"]);
    let list = ToBooleanClauseList::with_variable_map(computation::of(cnf()), computation::of(map))
        .compute()
        .unwrap();
    assert_eq!(
        list.clauses(),
        [BooleanClause::from([1, 2, 3]), BooleanClause::from([-1, -2, -3])]
    );
}

#[test]
fn tautology_disappears() {
    let formula = Formula::Or(vec![Formula::literal("A"), Formula::True]);
    let list = boolclause::convert(&formula, None).unwrap();
    assert!(list.is_empty());
}

#[test]
fn concurrent_extractions_share_a_map() {
    let map = VariableMap::from_names(["C", "B", "A"]);
    let first = ToBooleanClauseList::with_variable_map(
        computation::of(cnf()),
        computation::of(map.clone()),
    );
    let second = ToBooleanClauseList::with_variable_map(
        computation::from_fn(|| Ok(cnf())),
        computation::of(map),
    );
    let (a, b) = first.join(second).compute().unwrap();
    assert_eq!(a.clauses(), b.clauses());
    assert_eq!(a.clauses()[0], BooleanClause::from([3, 2, 1]));
}

#[test]
fn dimacs_through_extraction_and_back() {
    let input = "c 1 x\nc 2 y\nc 3 z\np cnf 3 3\n3 -1 0\n2 0\n-2 -3 1 0\n";
    let parsed = parser::cnf::parse(input).unwrap();
    let formula = parsed.to_formula().unwrap();
    let sorted = parsed.variable_map().unwrap().sorted();
    let reextracted = boolclause::convert(&formula, Some(&sorted)).unwrap();
    assert_eq!(reextracted.to_string(), input);

    let reversed = VariableMap::from_names(["z", "y", "x"]);
    let adapted = reextracted.adapt(reversed.into()).unwrap();
    assert_eq!(adapted.clauses()[0], BooleanClause::from([1, -3]));
    assert!(adapted.to_string().starts_with("c 1 z\n"));
}
