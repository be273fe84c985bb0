use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Float literal tokens, such as `3.14` or `5.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `fn`
    #[token("fn")]
    Fn,
    /// Identifier tokens; binding or function names such as `r` or `area_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments` running to the end of the line.
    #[token("#", skip_to_line_end)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line terminator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    EndLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(x) => write!(f, "float {x}"),
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Fn => write!(f, "'fn'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Comment => write!(f, "comment"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::Comma => write!(f, "','"),
            Self::Dot => write!(f, "'.'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndLine => write!(f, "end of line"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit into an `i64`, which surfaces
/// as a lexing error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Consumes the remainder of a comment, leaving the newline in place.
fn skip_to_line_end(lex: &mut logos::Lexer<Token>) {
    let rest = lex.remainder();
    let len = rest.find('\n').unwrap_or(rest.len());
    lex.bump(len);
}

/// Turns source text into `(Token, line)` pairs.
///
/// `first_line` is the line number assigned to the first token. A `-`
/// written directly in front of a numeric literal is folded into a negative
/// literal when it appears in operand position, i.e. at the start of the
/// input or after an operator, `(`, `,` or `=`.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for text that is not part of the
/// language and `ParseError::LiteralTooLarge` for integer literals outside the
/// `i64` range.
///
/// # Example
/// ```
/// use mint::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-23 - -33.5", 1).unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
///
/// assert_eq!(kinds, vec![Token::Integer(-23), Token::Minus, Token::Float(-33.5)]);
/// ```
pub fn tokenize(source: &str, first_line: usize) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: first_line });
    let mut spanned: Vec<(Token, usize, Range<usize>)> = Vec::new();

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => spanned.push((tok, line, lexer.span())),
            Err(()) => {
                let text = lexer.slice().to_string();
                if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                    if fold_minimum_literal(&mut spanned, &text, lexer.span()) {
                        continue;
                    }
                    return Err(ParseError::LiteralTooLarge { literal: text,
                                                             line });
                }
                return Err(ParseError::InvalidCharacter { text, line });
            },
        }
    }

    Ok(fold_negative_literals(spanned))
}

/// Attaches a preceding operand-position `-` to the magnitude of `i64::MIN`.
///
/// `9223372036854775808` only fits once it is negated, so it cannot wait for
/// [`fold_negative_literals`]. Returns whether the literal was folded.
fn fold_minimum_literal(spanned: &mut Vec<(Token, usize, Range<usize>)>,
                        digits: &str,
                        span: Range<usize>)
                        -> bool {
    if digits.parse::<u64>() != Ok(i64::MIN.unsigned_abs()) {
        return false;
    }
    let Some((Token::Minus, _, minus)) = spanned.last() else {
        return false;
    };
    let previous = spanned.len().checked_sub(2).map(|i| &spanned[i].0);
    if minus.end != span.start || !in_operand_position(previous) {
        return false;
    }

    let start = minus.start;
    if let Some((_, line, _)) = spanned.pop() {
        spanned.push((Token::Integer(i64::MIN), line, start..span.end));
    }
    true
}

/// Whether a `-` following `previous` starts an operand rather than
/// subtracting from one.
const fn in_operand_position(previous: Option<&Token>) -> bool {
    matches!(previous,
             None | Some(Token::Plus
                         | Token::Minus
                         | Token::Star
                         | Token::Slash
                         | Token::Caret
                         | Token::LParen
                         | Token::Comma
                         | Token::Equals
                         | Token::EndLine))
}

fn fold_negative_literals(spanned: Vec<(Token, usize, Range<usize>)>) -> Vec<(Token, usize)> {
    let mut out: Vec<(Token, usize)> = Vec::with_capacity(spanned.len());
    let mut iter = spanned.into_iter().peekable();

    while let Some((token, line, span)) = iter.next() {
        if token == Token::Minus
           && in_operand_position(out.last().map(|(t, _)| t))
           && let Some((next, _, next_span)) = iter.peek()
           && next_span.start == span.end
        {
            let negated = match next {
                Token::Integer(n) => n.checked_neg().map(Token::Integer),
                Token::Float(x) => Some(Token::Float(-x)),
                _ => None,
            };
            if let Some(negated) = negated {
                iter.next();
                out.push((negated, line));
                continue;
            }
        }
        out.push((token, line));
    }

    out
}
