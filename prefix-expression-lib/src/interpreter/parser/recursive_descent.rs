use crate::interpreter::error::{ParseError, ParseErrorKind, ParseResult};
use crate::interpreter::lexer::Cursor;
use crate::interpreter::operator::{Arity, Operator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::operation::OperationData;
use crate::interpreter::token::Token;
use log::trace;

/// The outcome of parsing one expression slot.
///
/// A closing parenthesis or the end of input are not errors by themselves, it is
/// up to the caller to decide whether an expression was required there.
enum Parsed {
    Expression(Node),
    ClosingParenthesis,
    EndOfInput,
}

pub(super) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(super) fn new(source: &'a str) -> Parser<'a> {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Parses a single expression that must span the whole source.
    pub(super) fn parse_root(&mut self) -> ParseResult<Node> {
        let root = match self.parse_expression()? {
            Parsed::Expression(node) => node,
            Parsed::ClosingParenthesis => {
                return Err(self.error(ParseErrorKind::UnexpectedClosingParenthesis))
            }
            Parsed::EndOfInput => return Err(self.error(ParseErrorKind::EmptyExpression)),
        };

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            let trailing = self.cursor.read_token();
            return Err(self.error(ParseErrorKind::TrailingInput(trailing.into())));
        }

        Ok(root)
    }

    fn parse_expression(&mut self) -> ParseResult<Parsed> {
        self.cursor.skip_whitespace();
        let text = self.cursor.read_token();

        match Token::classify(text) {
            Token::EndOfInput => Ok(Parsed::EndOfInput),
            Token::CloseParenthesis => Ok(Parsed::ClosingParenthesis),
            Token::OpenParenthesis => {
                let operation = self.parse_operation()?;
                self.expect_closing_parenthesis()?;
                Ok(Parsed::Expression(operation))
            }
            Token::Variable(variable) => Ok(Parsed::Expression(Node::new_variable(variable))),
            Token::LiteralInteger(text) => match text.parse::<i64>() {
                Ok(value) => Ok(Parsed::Expression(Node::new_literal_integer(value))),
                Err(_) => Err(self.error(ParseErrorKind::InvalidInteger(text.into()))),
            },
            Token::Symbol(text) => Err(self.error(ParseErrorKind::UnknownSymbol(text.into()))),
        }
    }

    /// Parses an operator and its operands, the opening parenthesis already consumed.
    fn parse_operation(&mut self) -> ParseResult<Node> {
        self.cursor.skip_whitespace();
        let symbol = self.cursor.read_token();
        if symbol.is_empty() {
            return Err(self.error(ParseErrorKind::UnexpectedEndOfInput));
        }
        let operator = Operator::from_symbol(symbol)
            .ok_or_else(|| self.error(ParseErrorKind::UnknownOperation(symbol.into())))?;

        trace!(
            "Parsing operands of {} ({:?}) at {}",
            operator,
            operator.arity(),
            self.cursor.position()
        );

        let operands = match operator.arity() {
            Arity::Fixed(count) => self.parse_fixed_operands(operator, count)?,
            Arity::Variadic => self.parse_variadic_operands(operator)?,
        };

        debug_assert!(operator.arity().accepts(operands.len()));
        Ok(Node::Operation(OperationData { operator, operands }))
    }

    fn parse_fixed_operands(&mut self, operator: Operator, count: usize) -> ParseResult<Vec<Node>> {
        let mut operands = Vec::with_capacity(count);
        for _ in 0..count {
            match self.parse_expression()? {
                Parsed::Expression(operand) => operands.push(operand),
                Parsed::ClosingParenthesis | Parsed::EndOfInput => {
                    let symbol = operator.symbol().into();
                    return Err(self.error(ParseErrorKind::MissingArgument(symbol)));
                }
            }
        }
        Ok(operands)
    }

    fn parse_variadic_operands(&mut self, operator: Operator) -> ParseResult<Vec<Node>> {
        let mut operands = vec![];
        loop {
            // Backtracking lookahead: a bare ')' ends the operands, and the cursor is
            // rewound so that the enclosing operation consumes it.
            let before_operand = self.cursor.position();
            match self.parse_expression()? {
                Parsed::Expression(operand) => operands.push(operand),
                Parsed::ClosingParenthesis => {
                    self.cursor.rewind(before_operand);
                    break;
                }
                Parsed::EndOfInput => {
                    return Err(self.error(ParseErrorKind::UnexpectedEndOfInput));
                }
            }
        }

        if operands.is_empty() {
            return Err(self.error(ParseErrorKind::NoArguments(operator.symbol().into())));
        }
        Ok(operands)
    }

    fn expect_closing_parenthesis(&mut self) -> ParseResult<()> {
        self.cursor.skip_whitespace();
        match Token::classify(self.cursor.read_token()) {
            Token::CloseParenthesis => Ok(()),
            Token::EndOfInput => Err(self.error(ParseErrorKind::UnexpectedEndOfInput)),
            _ => Err(self.error(ParseErrorKind::IncorrectOperatorCall)),
        }
    }

    /// Creates an error pointing just past the most recently read token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let source = self.cursor.source();
        let column = source[..self.cursor.position()].chars().count();
        ParseError::new(kind, source, Some(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::Variable;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> ParseResult<Node> {
        Parser::new(source).parse_root()
    }

    #[test]
    fn variadic_operands_stop_at_closing_parenthesis() {
        let tree = parse("(geom-mean x (negate y) 4)").unwrap();

        let expected = Node::new_operation(
            Operator::GeometricMean,
            vec![
                Node::new_variable(Variable::X),
                Node::new_operation(Operator::Negate, vec![Node::new_variable(Variable::Y)])
                    .unwrap(),
                Node::new_literal_integer(4),
            ],
        )
        .unwrap();
        assert_eq!(tree, expected);
    }

    #[test]
    fn nested_variadic_operations_consume_their_own_parentheses() {
        let tree = parse("(arith-mean (harm-mean 1 2) (arith-mean 3))").unwrap();

        assert_eq!(
            tree.to_prefix(),
            "(arith-mean (harm-mean 1 2) (arith-mean 3))"
        );
    }

    #[test]
    fn fixed_arity_operators_take_exactly_their_operands() {
        let tree = parse("(avg5 1 2 3 4 5)").unwrap();

        match tree {
            Node::Operation(data) => {
                assert_eq!(data.operator(), Operator::Average5);
                assert_eq!(data.operands().len(), 5);
            }
            other => panic!("expected an operation, got {:?}", other),
        }
    }

    #[test]
    fn too_many_operands_is_incorrect_operator_call() {
        let error = parse("(- x y z)").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::IncorrectOperatorCall);
        assert_eq!(error.position(), Some(8));
    }

    #[test]
    fn too_few_operands_is_missing_argument() {
        let error = parse("(med3 1 2)").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::MissingArgument("med3".into()));
    }

    #[test]
    fn variadic_operation_without_operands_is_rejected() {
        let error = parse("(harm-mean)").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::NoArguments("harm-mean".into()));
    }

    #[test]
    fn unterminated_variadic_operation_is_rejected() {
        let error = parse("(arith-mean 1 2").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::UnexpectedEndOfInput);
    }

    #[test]
    fn unterminated_fixed_operation_is_rejected() {
        let error = parse("(negate x").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::UnexpectedEndOfInput);
    }

    #[test]
    fn missing_operator_is_rejected() {
        assert_eq!(
            parse("(").unwrap_err().kind(),
            &ParseErrorKind::UnexpectedEndOfInput
        );
        assert_eq!(
            parse("()").unwrap_err().kind(),
            &ParseErrorKind::UnknownOperation(")".into())
        );
    }

    #[test]
    fn lone_closing_parenthesis_is_rejected() {
        let error = parse(")").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::UnexpectedClosingParenthesis);
    }

    #[test]
    fn lone_minus_is_an_invalid_integer() {
        let error = parse("(negate -)").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::InvalidInteger("-".into()));
    }

    #[test]
    fn overflowing_integer_is_invalid() {
        let error = parse("99999999999999999999").unwrap_err();

        assert_eq!(
            error.kind(),
            &ParseErrorKind::InvalidInteger("99999999999999999999".into())
        );
    }

    #[test]
    fn unknown_symbol_error_points_at_symbol() {
        let error = parse("(+ x w)").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::UnknownSymbol("w".into()));
        assert_eq!(
            error.message(),
            "Incorrect expression - unknown symbol: w\n(+ x w)\n     ^"
        );
    }

    #[test]
    fn trailing_input_is_reported_with_its_token() {
        let error = parse("x y").unwrap_err();

        assert_eq!(error.kind(), &ParseErrorKind::TrailingInput("y".into()));
        assert_eq!(error.position(), Some(3));
    }
}
