use crate::interpreter::operator::Operator;
use crate::interpreter::syntax::expression_tree::Node;
use anyhow::{ensure, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationData {
    pub(crate) operator: Operator,
    pub(crate) operands: Vec<Node>,
}

impl OperationData {
    /// Creates an operation after checking the operand count against the operator's arity.
    pub(crate) fn new(operator: Operator, operands: Vec<Node>) -> Result<OperationData> {
        ensure!(
            operator.arity().accepts(operands.len()),
            "Operation {} does not accept {} operands",
            operator,
            operands.len()
        );
        Ok(OperationData { operator, operands })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands
    }

    pub(crate) fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let values: Vec<f64> = self
            .operands
            .iter()
            .map(|operand| operand.evaluate(x, y, z))
            .collect();
        self.operator.evaluate(&values)
    }

    pub(super) fn node_name(&self) -> String {
        self.operator.symbol().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::Variable;

    #[test]
    fn operand_count_must_match_fixed_arity() {
        let operands = vec![Node::new_variable(Variable::X)];

        let result = OperationData::new(Operator::Subtract, operands);

        assert!(result.is_err());
    }

    #[test]
    fn variadic_operation_rejects_no_operands() {
        assert!(OperationData::new(Operator::HarmonicMean, vec![]).is_err());
    }

    #[test]
    fn operands_are_evaluated_in_order() {
        let operands = vec![
            Node::new_variable(Variable::Y),
            Node::new_variable(Variable::X),
        ];
        let data = OperationData::new(Operator::Subtract, operands).unwrap();

        assert_eq!(data.evaluate(1.0, 10.0, 0.0), 9.0);
    }
}
