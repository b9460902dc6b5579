// Integration tests for parsing and truth-table generation

use booltab::{
    evaluate_all, parse, truth_table, variables, BooltabError, Classification, ParseErrorKind,
    TableError, MAX_VARIABLES,
};
use std::collections::HashSet;

/// (assignment values in column order, result) for every row
fn rows_of(text: &str) -> Vec<(Vec<bool>, bool)> {
    let parsed = parse(text).expect("Parsing failed");
    let table = evaluate_all(&parsed).expect("Evaluation failed");
    table
        .rows()
        .iter()
        .map(|row| (row.assignment.iter().map(|(_, v)| v).collect(), row.result))
        .collect()
}

#[test]
fn test_or_table() {
    let parsed = parse("A+C").expect("Parsing failed");
    assert_eq!(variables(&parsed), &['A', 'C']);

    assert_eq!(
        rows_of("A+C"),
        vec![
            (vec![false, false], false),
            (vec![false, true], true),
            (vec![true, false], true),
            (vec![true, true], true),
        ]
    );
}

#[test]
fn test_and_table() {
    assert_eq!(
        rows_of("A*C"),
        vec![
            (vec![false, false], false),
            (vec![false, true], false),
            (vec![true, false], false),
            (vec![true, true], true),
        ]
    );
}

#[test]
fn test_not_table() {
    let parsed = parse("!A").expect("Parsing failed");
    assert_eq!(variables(&parsed), &['A']);
    assert_eq!(
        rows_of("!A"),
        vec![(vec![false], true), (vec![true], false)]
    );

    let table = evaluate_all(&parsed).unwrap();
    assert_eq!(table.values_matrix(), vec![vec![0, 1], vec![1, 0]]);
}

#[test]
fn test_mixed_precedence_with_parens() {
    let parsed = parse("A^C+!(A*C)").expect("Parsing failed");
    let table = evaluate_all(&parsed).expect("Evaluation failed");
    assert_eq!(table.len(), 4);

    // (A xor C) or not (A and C) is only false when both are true
    let results: Vec<bool> = table.results().collect();
    assert_eq!(results, vec![true, true, true, false]);
}

#[test]
fn test_four_variable_expression() {
    let parsed = parse("A+!B*C+!A*C*!D").expect("Parsing failed");
    assert_eq!(variables(&parsed), &['A', 'B', 'C', 'D']);

    let table = evaluate_all(&parsed).expect("Evaluation failed");
    assert_eq!(table.len(), 16);
    for row in table.rows() {
        let a = row.assignment.get('A').unwrap();
        let b = row.assignment.get('B').unwrap();
        let c = row.assignment.get('C').unwrap();
        let d = row.assignment.get('D').unwrap();
        assert_eq!(row.result, a || (!b && c) || (!a && c && !d));
    }
}

#[test]
fn test_double_negation_chains() {
    assert_eq!(rows_of("!   !   !x + y"), rows_of("!x+y"));
    assert_eq!(rows_of("(!!x + y)"), rows_of("x+y"));
    assert_eq!(rows_of("!~~!A"), rows_of("A"));
    assert_eq!(rows_of("!(!(!x + y))"), rows_of("!x+y"));
}

#[test]
fn test_nested_negation_of_groups() {
    let table = truth_table("!(x + y)").expect("Evaluation failed");
    let results: Vec<bool> = table.results().collect();
    assert_eq!(results, vec![true, false, false, false]);
}

#[test]
fn test_adjacent_variables_error() {
    let err = parse("ABCD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::AdjacentVariables);
}

#[test]
fn test_negation_after_paren_error() {
    let err = parse("(x + y)!").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MisplacedNegation);
}

#[test]
fn test_negation_after_variable_error() {
    let err = parse("(x!y + y)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MisplacedNegation);
}

#[test]
fn test_unbalanced_open_error() {
    let err = parse("A^C+!((A * C)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnbalancedOpen);
}

#[test]
fn test_unbalanced_close_error() {
    assert_eq!(
        parse("A^C)++!(A * C))").unwrap_err().kind,
        ParseErrorKind::UnbalancedClose
    );
    assert_eq!(
        parse("A^C++!(A * C))").unwrap_err().kind,
        ParseErrorKind::OperandUnderflow
    );
}

#[test]
fn test_doubled_operator_error() {
    let err = parse("A^C++!(A * C)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::OperandUnderflow);
    assert_eq!(err.message, "Too many operators!");
}

#[test]
fn test_invalid_symbol_error() {
    let err = parse("A | B").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidSymbol);
    assert!(err.message.contains('|'));
}

#[test]
fn test_variable_limit() {
    let parsed = parse("A*B*C*D*E").expect("Parsing failed");
    let table = evaluate_all(&parsed).expect("Evaluation failed");
    assert_eq!(table.len(), 1 << MAX_VARIABLES);

    let parsed = parse("A*B*C*D*E*F").expect("Parsing failed");
    assert_eq!(parsed.variable_count(), 6);
    assert_eq!(
        evaluate_all(&parsed).unwrap_err(),
        TableError::TooManyVariables { count: 6, limit: 5 }
    );
}

#[test]
fn test_rows_are_unique_and_complete() {
    let parsed = parse("a + b ^ c * !d").expect("Parsing failed");
    let table = evaluate_all(&parsed).expect("Evaluation failed");
    assert_eq!(table.len(), 16);

    let unique: HashSet<_> = table.rows().iter().map(|r| r.assignment.clone()).collect();
    assert_eq!(unique.len(), 16);
}

#[test]
fn test_case_sensitive_variables() {
    let parsed = parse("a * A").expect("Parsing failed");
    assert_eq!(variables(&parsed), &['A', 'a']);
    assert_eq!(evaluate_all(&parsed).unwrap().len(), 4);
}

#[test]
fn test_deterministic_results() {
    let first = truth_table("A^C+!(A*C)").unwrap();
    let second = truth_table("A^C+!(A*C)").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_classification() {
    assert_eq!(
        truth_table("A + !A").unwrap().classification(),
        Classification::Tautology
    );
    assert_eq!(
        truth_table("A * !A").unwrap().classification(),
        Classification::Contradiction
    );
    assert_eq!(
        truth_table("A ^ B").unwrap().classification(),
        Classification::Contingent
    );
}

#[test]
fn test_text_rendering() {
    let table = truth_table("A+C").unwrap();
    let expected = "\
+---+---+-----+
| A | C | A+C |
+---+---+-----+
| 0 | 0 | 0   |
| 0 | 1 | 1   |
| 1 | 0 | 1   |
| 1 | 1 | 1   |
+---+---+-----+
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_rendering_keeps_display_spacing() {
    let table = truth_table("  A * C ").unwrap();
    assert_eq!(table.expression(), "A * C");
    let text = table.to_string();
    assert!(text.contains("| A | C | A * C |"));
}

#[test]
fn test_error_messages() {
    let err = truth_table("ABCD").unwrap_err();
    assert!(matches!(err, BooltabError::InvalidExpression { .. }));
    assert_eq!(
        err.to_string(),
        "The expression: ABCD, is invalid!\nCannot have two variables in a row..."
    );

    let err = truth_table("A+B+C+D+E+F").unwrap_err();
    assert!(matches!(
        err,
        BooltabError::Table(TableError::TooManyVariables { .. })
    ));
    assert!(err.to_string().starts_with("Too many variables!"));
}
