use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// What went wrong while parsing a prefix expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unexpected input after the end of the expression: {0}")]
    TrailingInput(String),
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Incorrect expression - unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("Invalid integer literal: {0}")]
    InvalidInteger(String),
    #[error("No argument for operation {0}")]
    MissingArgument(String),
    #[error("Operation {0} needs at least one argument")]
    NoArguments(String),
    #[error("Incorrect operator call")]
    IncorrectOperatorCall,
    #[error("Unexpected ')'")]
    UnexpectedClosingParenthesis,
    #[error("Unexpected end of input, expected ')'")]
    UnexpectedEndOfInput,
}

/// A failure to parse a prefix expression, pointing at where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}\n{excerpt}")]
pub struct ParseError {
    kind: ParseErrorKind,
    position: Option<usize>,
    excerpt: String,
}

impl ParseError {
    /// Creates an error for `source`, where `position` is the column just past
    /// the offending token, or `None` to point at the start.
    pub fn new(kind: ParseErrorKind, source: &str, position: Option<usize>) -> ParseError {
        ParseError {
            excerpt: format_error(source, position),
            kind,
            position,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// The full human readable message, including the annotated excerpt.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Renders `source` on one line and a caret pointing at `position` on the next.
///
/// The caret is placed at `position - 1`, i.e. under the last character of the
/// token that ended at `position`. `None` puts the caret at the first column.
pub fn format_error(source: &str, position: Option<usize>) -> String {
    let offset = position.map_or(0, |position| position.saturating_sub(1));
    format!("{}\n{}^", source, " ".repeat(offset))
}
