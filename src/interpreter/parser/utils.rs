use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token if it is `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token the grammar requires next.
/// - `line`: Line reported if the input has run out.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// `ParseError::UnexpectedToken` describing expected vs. actual, or
/// `ParseError::UnexpectedEndOfInput`.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    line: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, l)) if tok == expected => Ok(*l),
        Some((tok, l)) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                            found:    tok.to_string(),
                                                            line:     *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       line }),
    }
}

/// Parses a comma-separated list of at least one item, then the closing
/// token.
///
/// Grammar: `list := item ("," item)* closing`
///
/// There is no empty form: a closing token in first position is handed to
/// `parse_item`, which reports it.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, or if an item is
/// followed by anything other than `,` or `closing`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = vec![parse_item(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        items.push(parse_item(tokens)?);
    }
    expect(tokens, closing, line)?;
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                               found:    tok.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "identifier".to_string(),
                                                       line:     0, }),
    }
}
