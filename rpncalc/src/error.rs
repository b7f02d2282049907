use thiserror::Error;

use crate::parser::Operator;

/// Everything that can go wrong converting or evaluating an expression.
/// Positions are 0-based token indexes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("`{0}` is not an operator")]
    UnknownOperator(String),

    #[error("The operator: {0} is invalid.")]
    InvalidOperator(String),

    #[error("unbalanced parenthesis at token {position}")]
    UnbalancedParentheses { position: usize },

    #[error("operator `{operator}` at token {position} needs two operands")]
    StackUnderflow { operator: Operator, position: usize },

    #[error("nothing to evaluate")]
    EmptyExpression,

    #[error("{0} values left on the stack, expected one")]
    LeftoverOperands(usize),

    #[error("empty token at {position}, tokens must be separated by exactly one space")]
    MalformedSpacing { position: usize },
}
