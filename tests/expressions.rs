use std::{
    fs,
    time::{Duration, Instant},
};

use stackcalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate, get_result,
    interpreter::{
        lexer::{Token, tokenize},
        validator::check,
    },
    validate,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let result = get_result(&expression);
            match expected.as_str() {
                "format error" => {
                    assert!(matches!(result, Err(Error::Parse(_))),
                            "{path:?}: expected '{expression}' to be rejected, got {result:?}");
                },
                "calculation error" => {
                    assert!(matches!(result, Err(Error::Runtime(_))),
                            "{path:?}: expected '{expression}' to fail, got {result:?}");
                },
                value => {
                    let value: i64 = value.parse()
                                          .unwrap_or_else(|e| panic!("Bad expectation {value}: {e}"));
                    assert_eq!(result, Ok(value), "{path:?}: '{expression}'");
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(expression, expected)| {
               (expression.trim().to_string(), expected.trim().to_string())
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(v) => assert_eq!(v, expected, "wrong value for '{src}'"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

#[test]
fn literal_is_returned_unchanged() {
    assert_value("42", 42);
    assert_value("  7  ", 7);
}

#[test]
fn priority_and_parentheses() {
    assert_value("2+3*4", 14);
    assert_value("(2+3)*4", 20);
    assert_value("2*(3+4)*5", 70);
}

#[test]
fn equal_priority_is_left_associative() {
    assert_value("10-2-3", 5);
    assert_value("64/4/2", 8);
    assert_value("8/2*4", 16);
}

#[test]
fn unary_signs() {
    assert_value("-5+3", -2);
    assert_value("1++2", 3);
    assert_value("1--2", 3);
    assert_value("1+-2", -1);
    assert_value("-(1+2)*3", -9);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("7/-2", -3);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate("8/0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { column: 2 })));
    assert_eq!(get_result("1 / (3 - 3)"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { column: 3 })));
}

#[test]
fn overflow_is_error() {
    assert_eq!(evaluate("9223372036854775807 * 2"),
               Err(Error::Runtime(RuntimeError::Overflow { column: 21 })));
    assert_eq!(evaluate("-9223372036854775807 - 1 - 1"),
               Err(Error::Runtime(RuntimeError::Overflow { column: 26 })));
}

#[test]
fn validate_rejects_unbalanced_parentheses() {
    assert!(!validate("(1+2"));
    assert!(!validate("1+2)"));
    assert!(!validate(")1+2("));
    assert!(validate("(1+2)"));
}

#[test]
fn validate_rejects_misplaced_operators() {
    assert!(!validate("*1"));
    assert!(!validate("1*/2"));
    assert!(!validate("(/2)"));
    assert!(!validate("1+"));
    assert!(!validate(""));
    assert!(validate("-1"));
    assert!(validate("+1"));
    assert!(validate("2*-1"));
}

#[test]
fn validate_rejects_unknown_characters() {
    assert!(!validate("1 % 2"));
    assert!(!validate("x+1"));
    assert!(!validate("1.0"));
}

#[test]
fn check_reports_why_input_is_rejected() {
    let reason = |src: &str| tokenize(src).and_then(|tokens| check(&tokens)).unwrap_err();

    assert_eq!(reason("1+2)"), ParseError::UnmatchedClosingParen { column: 4 });
    assert_eq!(reason("((1+2)"), ParseError::UnclosedParen { open: 1 });
    assert_eq!(reason("2*/3"), ParseError::MisplacedOperator { op: '/', column: 3 });
    assert_eq!(reason("4 -"), ParseError::TrailingOperator { column: 3 });
    assert_eq!(reason(""), ParseError::EmptyExpression);
    assert_eq!(reason(" \t "), ParseError::EmptyExpression);
    assert_eq!(reason("2 % 3"),
               ParseError::UnexpectedToken { token:  "%".to_string(),
                                             column: 3, });
    assert_eq!(reason("1 + 99999999999999999999"),
               ParseError::LiteralTooLarge { column: 5 });
}

#[test]
fn evaluate_without_validation_reports_runtime_errors() {
    assert_eq!(evaluate("*3"),
               Err(Error::Runtime(RuntimeError::MissingOperand { op:     '*',
                                                                 column: 1, })));
    assert_eq!(evaluate("(1"),
               Err(Error::Runtime(RuntimeError::MismatchedParentheses { column: 1 })));
    assert_eq!(evaluate("1)"),
               Err(Error::Runtime(RuntimeError::MismatchedParentheses { column: 2 })));
    assert_eq!(evaluate("1 2"),
               Err(Error::Runtime(RuntimeError::InvalidExpression { operands: 2 })));
    assert_eq!(evaluate(""),
               Err(Error::Runtime(RuntimeError::InvalidExpression { operands: 0 })));
}

#[test]
fn whitespace_is_skipped_but_counted_in_columns() {
    assert_eq!(tokenize(" \t1 \n+ 2 "),
               Ok(vec![(Token::Integer(1), 3), (Token::Plus, 6), (Token::Integer(2), 8)]));
}

#[test]
fn long_input_is_processed_in_linear_time() {
    let source = vec!["1"; 100_001].join("+");

    let start = Instant::now();
    let lexed = tokenize(&source).unwrap_or_else(|e| panic!("Tokenizing failed: {e}"));
    let result = get_result(&source);
    let elapsed = start.elapsed();

    assert_eq!(lexed.last(), Some(&(Token::Integer(1), source.len())));
    assert_eq!(lexed.len(), 200_001);
    assert_eq!(result, Ok(100_001));
    assert!(elapsed < Duration::from_secs(20),
            "{} tokens took {elapsed:?}",
            lexed.len());
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["2+3*4", "-(7-10)/2", "8/0", "(1+"] {
        assert_eq!(get_result(src), get_result(src), "'{src}' changed between runs");
        assert_eq!(evaluate(src), evaluate(src), "'{src}' changed between runs");
    }
}

#[test]
fn errors_distinguish_format_from_calculation() {
    assert!(get_result("1+").unwrap_err().is_format_error());
    assert!(!get_result("1/0").unwrap_err().is_format_error());
}
