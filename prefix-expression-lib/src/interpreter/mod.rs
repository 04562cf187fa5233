pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use anyhow::{Context, Result};
use error::ParseResult;
use log::debug;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Parses a prefix expression such as `(+ x (negate 2))` into an expression tree.
///
/// # Arguments
///
/// * `expression`: A text expression in prefix format.
///
/// returns: The equivalent expression tree, or a [`error::ParseError`] pointing at
/// the first malformed part of the input.
///
/// # Examples
///
/// ```
/// use prefix_expression::interpreter::parse_prefix;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse_prefix("(med3 1 5 3)")?;
/// assert_eq!(tree.evaluate(0.0, 0.0, 0.0), 3.0);
/// assert_eq!(tree.to_prefix(), "(med3 1 5 3)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse_prefix(expression: &str) -> ParseResult<Node> {
    let tree = parser::parse(expression)?;
    debug!("Parsed {:?} into {}", expression, tree.to_prefix());
    Ok(tree)
}

/// Parses the given expression and evaluates it for the given variable values.
///
/// # Examples
///
/// ```
/// use prefix_expression::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let value = evaluate("(arith-mean 1 2 3 4)", 0.0, 0.0, 0.0)?;
/// assert_eq!(value, 2.5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str, x: f64, y: f64, z: f64) -> Result<f64> {
    let tree = parse_prefix(expression)
        .with_context(|| format!("Could not parse expression {:?}", expression))?;
    Ok(tree.evaluate(x, y, z))
}

/// Describes an expression tree in both notations along with its value.
///
/// # Arguments
///
/// * `tree`: The expression to describe.
/// * `x`, `y`, `z`: The values to evaluate the expression with.
///
/// returns: Three lines, holding the prefix form, the postfix form and the value.
pub fn describe(tree: &Node, x: f64, y: f64, z: f64) -> Result<String> {
    let mut builder = Builder::new(64);

    builder.append("prefix:  ");
    builder.append(tree.to_prefix());
    builder.append('\n');
    builder.append("postfix: ");
    builder.append(tree.to_string());
    builder.append('\n');
    builder.append("value:   ");
    builder.append(tree.evaluate(x, y, z).to_string());

    builder.string().context("Failed to build description")
}
