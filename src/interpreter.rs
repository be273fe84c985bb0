/// The evaluator module executes statements and computes results.
///
/// The evaluator walks the AST, performs arithmetic with numeric promotion
/// and overflow checks, installs user-defined functions and applies them.
///
/// # Responsibilities
/// - Evaluates expressions and statements against the environment.
/// - Folds constants in function bodies at definition time.
/// - Reports runtime errors such as division by zero or unbound identifiers.
pub mod evaluator;
/// The environment module holds every binding visible to evaluation.
///
/// Bindings live in a single stack, newest last. Function applications push
/// their parameters on top and restore the stack afterwards, which gives the
/// language its dynamic scoping.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of raw source text and produces a stream of
/// tokens, each tagged with its source line: numbers, identifiers, the `fn`
/// keyword, operators, delimiters and comments.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Folds a minus sign in operand position into a negative literal.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. Each
/// input line holds exactly one statement: a function definition, an
/// assignment, or an expression.
pub mod parser;
/// The value module defines the runtime values produced by evaluation.
///
/// Values are integers, floats, or user-defined functions.
pub mod value;
