#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A specific token was required but a different one was found.
    UnexpectedToken {
        /// Description of the token the grammar required.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of the line while the grammar still required a token.
    UnexpectedEndOfInput {
        /// Description of the token the grammar required.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No primary expression (literal, identifier or parenthesized
    /// expression) could be found where one was required.
    ExpectedPrimary {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A complete statement was parsed but tokens remain on the line.
    UnexpectedTrailingTokens {
        /// The first token left unconsumed.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer found text that is not part of the language.
    InvalidCharacter {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into a signed 64-bit integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression nests operators, applications or parentheses more
    /// deeply than the interpreter accepts.
    NestingTooDeep {
        /// The maximum number of levels.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::ExpectedPrimary { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::InvalidCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, got {found}.")
            },
            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Error on line {line}: Expected {expected}, but the line ended.")
            },
            Self::ExpectedPrimary { found, line } => write!(f,
                                                            "Error on line {line}: Failed to find a primary expression, got {found}."),
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Parsing ended early, unexpected {token}."),
            Self::InvalidCharacter { text, line } => {
                write!(f, "Error on line {line}: Unrecognized input '{text}'.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Expression nests more than {limit} levels deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
