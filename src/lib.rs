//! # mint
//!
//! mint is a small expression language written in Rust.
//! It parses and evaluates one statement per line: arithmetic on integers and
//! floats, assignments, and user-defined functions with dynamically scoped
//! parameters.

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

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, Outcome},
        lexer::tokenize,
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a line as a tree, together with their textual
/// rendering. The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders trees in the parenthesized `(Add(Int 1)(Int 2))` form.
pub mod ast;
/// Interpreter settings shared by the library and the command-line driver.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the offending token or name and the
/// source line it was found on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation
/// and value representations to provide a complete runtime for mint source.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and exact arithmetic.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` in one audited place.
/// - Compute integer powers exactly, reporting overflow.
pub mod util;

/// Interprets a single line of source against a context.
///
/// The line is tokenized, parsed into at most one statement and evaluated.
/// Bindings made by the line stay in `context` for later lines. A line with
/// nothing but a comment yields [`Outcome::Empty`].
///
/// # Parameters
/// - `source`: The text of the line.
/// - `line`: Its line number, used in error messages.
/// - `context`: The evaluation context to run in.
///
/// # Errors
/// Returns [`Error::Parse`] if the line is not a well-formed statement and
/// [`Error::Runtime`] if evaluation fails. The environment is left as it was
/// before the line in both cases.
///
/// # Example
/// ```
/// use mint::{interpret_line, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// interpret_line("fn f(x, y) = x * y - 0.123456", 1, &mut context).unwrap();
///
/// let outcome = interpret_line("f(42, 0.01)", 2, &mut context).unwrap();
/// assert_eq!(outcome.to_string(), "(Float 0.296544)");
/// ```
pub fn interpret_line(source: &str, line: usize, context: &mut Context) -> Result<Outcome, Error> {
    let tokens = tokenize(source, line)?;

    let Some(statement) = parse(&tokens)? else {
        return Ok(Outcome::Empty);
    };

    debug!(line, %statement, "evaluating statement");
    Ok(context.eval_statement(statement)?)
}

/// Runs every line of a script, continuing past errors.
///
/// Returns one result per source line, in order.
pub fn run_script(source: &str, context: &mut Context) -> Vec<Result<Outcome, Error>> {
    source.lines()
          .enumerate()
          .map(|(index, text)| interpret_line(text, index + 1, context))
          .collect()
}

/// Returns the final evaluation result after execution.
///
/// This function runs all lines of the provided source string in a fresh
/// context and stops at the first failing line. If execution succeeds, it
/// returns the outcome of the last line that produced one, or `None` when
/// every line was blank or a comment.
///
/// # Errors
/// Returns the first parse or runtime error encountered.
///
/// # Examples
/// ```
/// use mint::get_result;
///
/// let result = get_result("x = 2 + 2\nx * 3").unwrap().unwrap();
/// assert_eq!(result.to_string(), "(Int 12)");
///
/// // 'y' is not defined.
/// assert!(get_result("z = y + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<Outcome>, Error> {
    let mut context = Context::new();
    let mut result = None;

    for (index, text) in source.lines().enumerate() {
        match interpret_line(text, index + 1, &mut context)? {
            Outcome::Empty => {},
            outcome => result = Some(outcome),
        }
    }

    Ok(result)
}
