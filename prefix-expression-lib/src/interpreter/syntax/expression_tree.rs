use crate::interpreter::operator::Operator;
use crate::interpreter::syntax::operation::OperationData;
use crate::interpreter::syntax::syntax_visitor::{walk_operation, SyntaxVisitor};
use crate::interpreter::token::Variable;
use anyhow::{Context, Result};
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    LiteralInteger(i64),
    Variable(Variable),
    // Non-terminal symbols (non-leaves)
    Operation(OperationData),
}

impl Node {
    pub fn new_literal_integer(value: i64) -> Node {
        Node::LiteralInteger(value)
    }

    pub fn new_variable(variable: Variable) -> Node {
        Node::Variable(variable)
    }

    /// Creates an operation node, failing if `operands` does not fit the operator's arity.
    pub fn new_operation(operator: Operator, operands: Vec<Node>) -> Result<Node> {
        Ok(Node::Operation(OperationData::new(operator, operands)?))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Node::LiteralInteger(_) | Node::Variable(_))
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Node::LiteralInteger(_) | Node::Variable(_) => None,
            Node::Operation(data) => Some(data.operator),
        }
    }

    /// Evaluates the expression with the given values substituted for its variables.
    ///
    /// Evaluation never fails: division by zero and similar edge cases produce
    /// infinities or NaN, the same as `f64` arithmetic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// use prefix_expression::interpreter::parse_prefix;
    ///
    /// let tree = parse_prefix("(negate (* x y))")?;
    /// assert_eq!(tree.evaluate(2.0, 3.0, 0.0), -6.0);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Node::LiteralInteger(value) => *value as f64,
            Node::Variable(variable) => variable.select(x, y, z),
            Node::Operation(data) => data.evaluate(x, y, z),
        }
    }

    /// Renders the expression in fully parenthesized prefix notation,
    /// which [`crate::interpreter::parse_prefix`] reads back into an equal tree.
    pub fn to_prefix(&self) -> String {
        match self {
            Node::LiteralInteger(_) | Node::Variable(_) => self.to_string(),
            Node::Operation(data) => format!(
                "({} {})",
                data.operator,
                data.operands.iter().map(Node::to_prefix).join(" ")
            ),
        }
    }

    /// Draws the expression as an indented tree, one node per line.
    pub fn to_tree(&self) -> Result<String> {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        write_tree(&visitor.builder.build(), &mut buffer).context("Failed to draw tree")?;
        String::from_utf8(buffer).context("Tree drawing is not valid UTF-8")
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::LiteralInteger(value) => visitor.visit_literal_integer(*value),
            Node::Variable(variable) => visitor.visit_variable(*variable),
            Node::Operation(data) => visitor.visit_operation(data),
        }
    }
}

/// Postfix notation: the operands separated by spaces, followed by the operator.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::LiteralInteger(value) => write!(f, "{}", value),
            Node::Variable(variable) => write!(f, "{}", variable),
            Node::Operation(data) => {
                for operand in &data.operands {
                    write!(f, "{} ", operand)?;
                }
                write!(f, "{}", data.operator)
            }
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal_integer(&mut self, value: i64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_variable(&mut self, variable: Variable) {
        self.builder.add_empty_child(variable.to_string());
    }
    fn visit_operation(&mut self, data: &OperationData) {
        self.builder.begin_child(data.node_name());
        walk_operation(self, data);
        self.builder.end_child();
    }
}
