use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::{MAX_NESTING_DEPTH, Nested, ParseResult},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a function application, or falls back to a primary expression.
///
/// An identifier immediately followed by `(` starts an application whose
/// argument list holds at least one expression.
///
/// Grammar:
/// ```text
///     application := ID "(" arguments ")"
///                  | primary
///     arguments   := additive ("," additive)*
/// ```
pub(in crate::interpreter::parser) fn parse_application<'a, I>(tokens: &mut Peekable<I>,
                                                               budget: usize)
                                                               -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(name), line)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::LParen, _)) = lookahead.peek() {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            tokens.next();
            let inner = descend(budget, line)?;
            let arguments = parse_comma_separated(tokens,
                                                  |tokens| parse_additive(tokens, inner),
                                                  &Token::RParen,
                                                  line)?;
            let child = arguments.iter().map(|arg| arg.height).max().unwrap_or(0);
            let arguments = arguments.into_iter().map(|arg| arg.expr).collect();
            return Nested::node(Expr::Application { name,
                                                    arguments,
                                                    line },
                                child,
                                budget,
                                line);
        }
    }
    parse_primary(tokens, budget)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INT | FLOAT | ID | "(" additive ")"
/// ```
///
/// # Errors
/// Returns `ParseError::ExpectedPrimary` for any other token, including the
/// `)` of an empty argument list.
pub(in crate::interpreter::parser) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                                           budget: usize)
                                                           -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::ExpectedPrimary { found: "end of input".to_string(),
                                                 line:  0, });
    };
    let line = *line;

    match token {
        Token::Integer(n) => Ok(Nested::leaf(Expr::Literal { value: (*n).into(),
                                                              line })),
        Token::Float(x) => Ok(Nested::leaf(Expr::Literal { value: (*x).into(),
                                                            line })),
        Token::Identifier(name) => Ok(Nested::leaf(Expr::Identifier { name: name.clone(),
                                                                       line })),
        Token::LParen => {
            let inner = parse_additive(tokens, descend(budget, line)?)?;
            expect(tokens, &Token::RParen, line)?;
            Ok(Nested { expr:   inner.expr,
                        height: inner.height + 1, })
        },
        tok => Err(ParseError::ExpectedPrimary { found: tok.to_string(),
                                                 line }),
    }
}

/// The budget left for the contents of a group or an argument list.
const fn descend(budget: usize, line: usize) -> ParseResult<usize> {
    match budget.checked_sub(1) {
        Some(inner) => Ok(inner),
        None => Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                 line }),
    }
}
