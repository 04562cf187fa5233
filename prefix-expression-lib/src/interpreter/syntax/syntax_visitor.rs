use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::operation::OperationData;
use crate::interpreter::token::Variable;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal_integer(&mut self, _value: i64) {}
    fn visit_variable(&mut self, _variable: Variable) {}
    fn visit_operation(&mut self, data: &OperationData) {
        walk_operation(self, data)
    }
}

pub(crate) fn walk_operation(visitor: &mut impl SyntaxVisitor, data: &OperationData) {
    data.operands
        .iter()
        .for_each(|operand| operand.accept(visitor));
}
