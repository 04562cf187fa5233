pub mod expression_tree;
pub mod operation;
pub(crate) mod syntax_visitor;
