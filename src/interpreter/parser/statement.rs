use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function definition,
/// - an assignment,
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned.
///
/// Grammar: `expr := function_def | assignment | additive`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// Needs two tokens of lookahead, taken from a clone of the iterator. If the
/// input is not an assignment, returns `Ok(None)` without consuming tokens.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(name), line)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, _)) = lookahead.peek() {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}

/// Parses a function definition of the form
/// `fn <name>(<param>, ...) = <expression>`.
///
/// The parameter list must hold at least one identifier. Duplicate names are
/// accepted here and rejected when the definition is evaluated.
///
/// If the next token is not `fn`, returns `Ok(None)` without consuming input.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Fn, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen, line)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen, line)?;
    expect(tokens, &Token::Equals, line)?;
    let body = parse_expression(tokens)?;

    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              body,
                                              line })))
}
