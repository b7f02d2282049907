use std::fmt;
use std::ops::Deref;

use lexers::{SpaceTokenizer, Spacing};
use log::{debug, trace};

use crate::error::CalcError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    // Higher binds tighter, equal ranks reduce left to right
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn is_operator(token: &str) -> bool {
    Operator::from_symbol(token).is_some()
}

pub fn precedence(token: &str) -> Result<u8, CalcError> {
    Operator::from_symbol(token)
        .map(Operator::precedence)
        .ok_or_else(|| CalcError::UnknownOperator(token.to_string()))
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    // numeric literal or anything unrecognized, kept verbatim
    Operand(String),
    Op(Operator),
    OParen,
    CParen,
}

impl Token {
    pub fn classify(lexeme: String) -> Token {
        match lexeme.as_str() {
            "(" => Token::OParen,
            ")" => Token::CParen,
            symbol => match Operator::from_symbol(symbol) {
                Some(op) => Token::Op(op),
                None => Token::Operand(lexeme),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(lexeme) => f.write_str(lexeme),
            Token::Op(op) => write!(f, "{}", op),
            Token::OParen => f.write_str("("),
            Token::CParen => f.write_str(")"),
        }
    }
}

/// A token sequence in postfix order. Displays as the tokens joined by
/// single spaces.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Splits lexemes into tokens, rejecting the empty ones strict spacing yields.
pub(crate) fn classify_all(
    lex: impl Iterator<Item = String>,
) -> impl Iterator<Item = Result<(usize, Token), CalcError>> {
    lex.enumerate().map(|(position, lexeme)| {
        if lexeme.is_empty() {
            Err(CalcError::MalformedSpacing { position })
        } else {
            Ok((position, Token::classify(lexeme)))
        }
    })
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, CalcError> {
        Self::parse_with(expr, Spacing::default())
    }

    pub fn parse_with(expr: &str, spacing: Spacing) -> Result<RPNExpr, CalcError> {
        Self::parse(&mut SpaceTokenizer::from_str(expr, spacing))
    }

    pub fn parse(lex: &mut impl Iterator<Item = String>) -> Result<RPNExpr, CalcError> {
        let mut out = Vec::new();
        // pending operators and open parens, with their token position
        let mut stack: Vec<(usize, Token)> = Vec::new();

        for classified in classify_all(lex) {
            let (position, token) = classified?;
            trace!("shunting token {} `{}`", position, token);
            match token {
                Token::Op(op) => {
                    loop {
                        match stack.pop() {
                            Some((_, Token::Op(top))) if top.precedence() >= op.precedence() => {
                                out.push(Token::Op(top))
                            }
                            Some(other) => {
                                stack.push(other);
                                break;
                            }
                            None => break,
                        }
                    }
                    stack.push((position, token));
                }
                Token::OParen => stack.push((position, token)),
                Token::CParen => loop {
                    match stack.pop() {
                        Some((_, Token::OParen)) => break,
                        Some((_, pending)) => out.push(pending),
                        None => return Err(CalcError::UnbalancedParentheses { position }),
                    }
                },
                Token::Operand(_) => out.push(token),
            }
        }
        while let Some((position, top)) = stack.pop() {
            match top {
                Token::OParen => return Err(CalcError::UnbalancedParentheses { position }),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
