//! # stackcalc
//!
//! stackcalc is an integer arithmetic calculator built on a linked stack,
//! together with the linked list and stack it is built from.
//! It validates and evaluates infix expressions with `+`, `-`, `*`, `/`,
//! parentheses and unary signs using the classic two-stack algorithm.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate_tokens, lexer::tokenize, validator::check},
};

/// Linear containers used by the calculator.
///
/// This module provides an owned singly-linked list and a LIFO stack built on
/// top of it. Nodes are owned through `Option<Box<_>>` links and released
/// automatically when a container is cleared or dropped.
///
/// # Responsibilities
/// - Front, positional and search operations on the list.
/// - Push, pop and peek on the stack.
/// - Iterative teardown so long chains do not recurse on drop.
pub mod collections;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, validating
/// or evaluating an expression, plus the errors of the container exercises.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches source columns and detailed messages for context.
/// - Separates rejected input from failed calculation.
pub mod error;
/// Orchestrates the processing of an expression.
///
/// This module ties together lexing, validation and evaluation and exposes the
/// entry points for each stage.
///
/// # Responsibilities
/// - Turns raw text into tokens.
/// - Checks the token stream before evaluation.
/// - Evaluates it with an operand and an operator stack.
pub mod interpreter;
/// Defines the arithmetic operators and their priorities.
pub mod operator;
/// The interactive prompt.
///
/// Reads expressions line by line, answers each one and stops on `exit`. It
/// only relies on the validate-then-evaluate entry point of this crate.
pub mod repl;

pub use interpreter::{evaluator::core::evaluate, validator::validate};

/// Validates and evaluates `source`, returning its value.
///
/// This is the full pipeline used by the prompt: the text is tokenized, the
/// token stream is validated, and only then evaluated.
///
/// # Errors
/// Returns `Error::Parse` if the input is malformed and `Error::Runtime` if
/// the calculation fails.
///
/// # Examples
/// ```
/// use stackcalc::get_result;
///
/// assert_eq!(get_result("(2+3)*4").unwrap(), 20);
/// assert_eq!(get_result("1++2").unwrap(), 3);
///
/// // Rejected before evaluation.
/// let err = get_result("2*").unwrap_err();
/// assert!(err.is_format_error());
///
/// // Accepted, but not computable.
/// let err = get_result("8/(4-4)").unwrap_err();
/// assert!(!err.is_format_error());
/// ```
pub fn get_result(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    check(&tokens)?;
    Ok(evaluate_tokens(&tokens)?)
}
