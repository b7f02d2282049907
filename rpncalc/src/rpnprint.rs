use crate::error::CalcError;
use crate::parser::{Operator, RPNExpr, Token};

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a str),
    Node(Operator, Box<AST<'a>>, Box<AST<'a>>),
}

// leaves never need parens
const LEAF_PRECEDENCE: u8 = u8::MAX;

impl RPNExpr {
    fn build_ast(&self) -> Result<AST<'_>, CalcError> {
        let mut ops = Vec::new();
        for (position, token) in self.0.iter().enumerate() {
            match token {
                Token::Operand(lexeme) => ops.push(AST::Leaf(lexeme)),
                Token::Op(op) => {
                    let underflow = || CalcError::StackUnderflow { operator: *op, position };
                    let rhs = ops.pop().ok_or_else(underflow)?;
                    let lhs = ops.pop().ok_or_else(underflow)?;
                    ops.push(AST::Node(*op, Box::new(lhs), Box::new(rhs)));
                }
                Token::OParen | Token::CParen => {
                    return Err(CalcError::InvalidOperator(token.to_string()))
                }
            }
        }
        match ops.len() {
            0 | 1 => ops.pop().ok_or(CalcError::EmptyExpression),
            n => Err(CalcError::LeftoverOperands(n)),
        }
    }

    /// Renders the expression back in infix form, space separated, adding
    /// parens only where precedence or left associativity need them. The
    /// output parses back to the same postfix sequence.
    pub fn to_infix(&self) -> Result<String, CalcError> {
        fn printer(root: &AST) -> (String, u8) {
            match root {
                AST::Leaf(lexeme) => (lexeme.to_string(), LEAF_PRECEDENCE),
                AST::Node(op, lhs, rhs) => {
                    let prec = op.precedence();
                    let (lhs, lhs_prec) = printer(lhs);
                    let (rhs, rhs_prec) = printer(rhs);
                    let lh = if prec > lhs_prec { format!("( {} )", lhs) } else { lhs };
                    // NOTE: 'a - (b - c)' and 'a + (b + c)' keep their parens
                    let rh = if prec >= rhs_prec { format!("( {} )", rhs) } else { rhs };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }
        Ok(printer(&self.build_ast()?).0)
    }
}
