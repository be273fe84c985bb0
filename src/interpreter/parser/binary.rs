use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Nested, ParseResult},
            primary::parse_application,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `budget`: How many more levels the tree may nest.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression, with its
/// height.
pub(in crate::interpreter::parser) fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                                                            budget: usize)
                                                            -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_chain(tokens,
                     budget,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
pub(in crate::interpreter::parser) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                                                  budget: usize)
                                                                  -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_chain(tokens,
                     budget,
                     |op| matches!(op, BinaryOperator::Mult | BinaryOperator::Div),
                     parse_exponent)
}

/// Folds `operand (op operand)*` into a left-nested tree.
///
/// Each operator adds a level on top of everything parsed so far, so a long
/// chain is cut off once it reaches the nesting budget.
fn parse_left_chain<'a, I>(tokens: &mut Peekable<I>,
                           budget: usize,
                           accepts: impl Fn(BinaryOperator) -> bool,
                           parse_operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Nested>)
                           -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens, budget)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        let line = *line;
        tokens.next();
        let right = parse_operand(tokens, budget)?;
        let child = left.height.max(right.height);
        left = Nested::node(Expr::BinaryOp { left: Box::new(left.expr),
                                             op,
                                             right: Box::new(right.expr),
                                             line },
                            child,
                            budget,
                            line)?;
    }
    Ok(left)
}

/// Parses an exponentiation.
///
/// Only a single `^` is combined per level; `2 ^ 3 ^ 4` leaves the second
/// `^` unconsumed, which the caller reports as an error.
///
/// The rule is: `exponent := application ["^" application]`
pub(in crate::interpreter::parser) fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                                                            budget: usize)
                                                            -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_application(tokens, budget)?;
    if let Some((Token::Caret, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let right = parse_application(tokens, budget)?;
        let child = left.height.max(right.height);
        return Nested::node(Expr::BinaryOp { left: Box::new(left.expr),
                                             op: BinaryOperator::Exp,
                                             right: Box::new(right.expr),
                                             line },
                            child,
                            budget,
                            line);
    }
    Ok(left)
}

#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mult),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Exp),
        _ => None,
    }
}
