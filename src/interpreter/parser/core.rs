use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many levels an expression tree may nest. Every operator, application
/// and parenthesized group counts as one level.
///
/// Evaluation, folding and rendering all recurse once per level, so the limit
/// keeps a single line from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A parsed expression together with the height of its tree.
///
/// Literals and identifiers have height `0`.
pub(in crate::interpreter::parser) struct Nested {
    pub(in crate::interpreter::parser) expr:   Expr,
    pub(in crate::interpreter::parser) height: usize,
}

impl Nested {
    pub(in crate::interpreter::parser) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 0 }
    }

    /// Wraps `expr`, whose deepest child has height `child`, checking the
    /// result against the remaining `budget`.
    pub(in crate::interpreter::parser) fn node(expr: Expr,
                                               child: usize,
                                               budget: usize,
                                               line: usize)
                                               -> ParseResult<Self> {
        let height = child + 1;
        if height > budget {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line });
        }
        Ok(Self { expr, height })
    }
}

/// Parses the tokens of one input line into a statement.
///
/// Grammar: `input := expr [comment]`
///
/// A line holding nothing but a comment (or nothing at all) yields `None`.
/// When the slice does not already end in [`Token::EndLine`], one is supplied
/// so that a missing token is reported as "got end of line" on the right
/// line.
///
/// # Errors
/// Returns a `ParseError` for any token mismatch, and
/// `ParseError::UnexpectedTrailingTokens` when a complete statement is
/// followed by further tokens.
///
/// # Example
/// ```
/// use mint::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("fn f(f) = 5*f", 1).unwrap();
/// let statement = parse(&tokens).unwrap().unwrap();
///
/// assert_eq!(statement.to_string(), "(Fun f (Param(ID f)())(Mult(Int 5)(ID f)))");
///
/// let tokens = tokenize("# nothing to see", 1).unwrap();
/// assert!(parse(&tokens).unwrap().is_none());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Option<Statement>> {
    let sentinel = match tokens.last() {
        Some((Token::EndLine, _)) => None,
        Some((_, line)) => Some((Token::EndLine, *line)),
        None => Some((Token::EndLine, 0)),
    };
    let mut iter = tokens.iter().chain(sentinel.iter()).peekable();

    if let Some((Token::Comment | Token::EndLine, _)) = iter.peek() {
        parse_line_end(&mut iter)?;
        return Ok(None);
    }

    let statement = parse_statement(&mut iter)?;
    parse_line_end(&mut iter)?;
    trace!(%statement, "parsed statement");

    Ok(Some(statement))
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Errors
/// Any grammar mismatch, and `ParseError::NestingTooDeep` once the tree
/// would nest more than [`MAX_NESTING_DEPTH`] levels.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    Ok(parse_additive(tokens, MAX_NESTING_DEPTH)?.expr)
}

/// Consumes an optional comment and the end of the line.
///
/// Anything else left on the line means the statement ended early.
fn parse_line_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Comment, _)) = tokens.peek() {
        tokens.next();
    }
    if let Some((Token::EndLine, _)) = tokens.peek() {
        tokens.next();
    }
    match tokens.next() {
        None => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                       line:  *line, })
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn render(source: &str) -> String {
        let tokens = tokenize(source, 1).unwrap();
        parse(&tokens).unwrap()
                      .map(|s| s.to_string())
                      .unwrap_or_default()
    }

    fn parse_err(source: &str) -> ParseError {
        let tokens = tokenize(source, 1).unwrap();
        parse(&tokens).unwrap_err()
    }

    #[test]
    fn additive_is_left_associative() {
        assert_eq!(render("1 - 2 + 3"), "(Add(Sub(Int 1)(Int 2))(Int 3))");
    }

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        assert_eq!(render("1 + 2 * 3 / 4"), "(Add(Int 1)(Div(Mult(Int 2)(Int 3))(Int 4)))");
    }

    #[test]
    fn exponent_binds_tighter_than_multiplicative() {
        assert_eq!(render("2 * 3 ^ 2"), "(Mult(Int 2)(Exp(Int 3)(Int 2)))");
        assert_eq!(render("64^0.5"), "(Exp(Int 64)(Float 0.500000))");
    }

    #[test]
    fn chained_exponent_is_rejected() {
        assert!(matches!(parse_err("2 ^ 3 ^ 4"),
                         ParseError::UnexpectedTrailingTokens { .. }));
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(render("(1 + 2) * x"), "(Mult(Add(Int 1)(Int 2))(ID x))");
    }

    #[test]
    fn assignment() {
        assert_eq!(render("circumference = 3.14 * 2 * r"),
                   "(Assign(ID circumference)(Mult(Mult(Float 3.140000)(Int 2))(ID r)))");
    }

    #[test]
    fn function_definition() {
        assert_eq!(render("fn f(x, y) = x * y - 0.123456"),
                   "(Fun f (Param(ID x)(Param(ID y)()))(Sub(Mult(ID x)(ID y))(Float 0.123456)))");
    }

    #[test]
    fn application_with_expression_arguments() {
        assert_eq!(render("f(42, 1 + x) ^ 2"),
                   "(Exp(App(ID f)(Arg(Int 42)(Arg(Add(Int 1)(ID x))())))(Int 2))");
    }

    #[test]
    fn trailing_comment_is_allowed() {
        assert_eq!(render("1 + 2 # three"), "(Add(Int 1)(Int 2))");
    }

    #[test]
    fn comment_only_and_blank_lines_are_empty() {
        assert_eq!(render("# just a comment"), "");
        assert_eq!(render(""), "");
    }

    #[test]
    fn empty_argument_list_is_error() {
        assert_eq!(parse_err("f()"),
                   ParseError::ExpectedPrimary { found: "')'".to_string(),
                                                 line:  1, });
    }

    #[test]
    fn empty_parameter_list_is_error() {
        assert!(matches!(parse_err("fn f() = 1"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn leftover_tokens_are_error() {
        assert_eq!(parse_err("1 2"),
                   ParseError::UnexpectedTrailingTokens { token: "integer 2".to_string(),
                                                          line:  1, });
    }

    #[test]
    fn missing_closing_paren_reports_end_of_line() {
        assert_eq!(parse_err("(1 + 2"),
                   ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    "end of line".to_string(),
                                                 line:     1, });
    }

    #[test]
    fn assignment_needs_identifier_target() {
        assert!(parse_err("1 = 2").line() == 1);
    }

    #[test]
    fn assignment_inside_parentheses_is_error() {
        assert!(matches!(parse_err("(x = 2)"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn long_sum_is_rejected() {
        let source = vec!["1"; 20_000].join(" + ");
        assert_eq!(parse_err(&source),
                   ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line:  1, });
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        let source = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
        assert!(matches!(parse_err(&source), ParseError::NestingTooDeep { .. }));
    }

    #[test]
    fn deep_applications_are_rejected() {
        let source = format!("{}1{}", "f(".repeat(20_000), ")".repeat(20_000));
        assert!(matches!(parse_err(&source), ParseError::NestingTooDeep { .. }));
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let sum = vec!["1"; MAX_NESTING_DEPTH + 1].join("+");
        assert!(render(&sum).starts_with("(Add(Add("));

        let product = format!("{}x{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
        assert_eq!(render(&product), "(ID x)");

        let too_deep = vec!["1"; MAX_NESTING_DEPTH + 2].join("+");
        assert!(matches!(parse_err(&too_deep), ParseError::NestingTooDeep { .. }));
    }
}
