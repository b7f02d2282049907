//! Arithmetic over space separated tokens: infix text is converted to
//! postfix (RPN) with the shunting-yard algorithm, then evaluated on a
//! value stack.
//!
//! ```
//! let postfix = rpncalc::convert_infix_to_postfix("3 + 4 * 5").unwrap();
//! assert_eq!(postfix, "3 4 5 * +");
//! assert_eq!(rpncalc::evaluate(&postfix).unwrap(), "23");
//! ```

pub use error::CalcError;
pub use lexers::Spacing;

pub use parser::{is_operator, precedence};
pub use parser::{Operator, RPNExpr, ShuntingParser, Token};

pub use rpneval::{convert_infix_to_postfix, evaluate, format_value, Calculator};

mod error;

pub mod parser;

mod rpnprint;
mod rpneval;
#[cfg(test)]
mod rpneval_test;
