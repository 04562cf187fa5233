mod recursive_descent;

use crate::interpreter::error::{ParseError, ParseErrorKind, ParseResult};
use crate::interpreter::lexer::WHITESPACE;
use crate::interpreter::parser::recursive_descent::Parser;
use crate::interpreter::syntax::expression_tree::Node;

/// Parses the given prefix expression into an equivalent expression tree.
///
/// Leading and trailing whitespace is ignored, and positions reported in errors
/// refer to the trimmed text. Parsing stops at the first error.
///
/// # Arguments
///
/// * `source`: The text of the expression, in prefix notation.
///
/// returns: The root of the expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use prefix_expression::interpreter::parser::parse;
///
/// let tree = parse("(+ x 1)")?;
/// assert_eq!(tree.to_string(), "x 1 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let trimmed = source.trim_matches(&WHITESPACE[..]);
    if trimmed.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::EmptyExpression,
            trimmed,
            None,
        ));
    }
    Parser::new(trimmed).parse_root()
}
