use lexers::{is_number, SpaceTokenizer, Spacing};
use log::{debug, trace};

use crate::error::CalcError;
use crate::parser::{classify_all, RPNExpr, ShuntingParser, Token};

/// Conversion and evaluation settings. Holds no state between calls, so a
/// single value can be shared freely across threads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Calculator {
    spacing: Spacing,
    // decimal places kept after each operation
    precision: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    pub const DEFAULT_PRECISION: u32 = 4;

    pub fn new() -> Calculator {
        Calculator { spacing: Spacing::Lenient, precision: Self::DEFAULT_PRECISION }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Calculator {
        self.spacing = spacing;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Calculator {
        self.precision = precision;
        self
    }

    pub fn spacing(&self) -> Spacing { self.spacing }

    pub fn precision(&self) -> u32 { self.precision }

    /// Infix text to postfix text, tokens joined by single spaces.
    pub fn convert(&self, infix: &str) -> Result<String, CalcError> {
        ShuntingParser::parse_with(infix, self.spacing).map(|rpn| rpn.to_string())
    }

    /// Evaluates postfix text, returning the result formatted by `format_value`.
    pub fn evaluate(&self, postfix: &str) -> Result<String, CalcError> {
        let tokens = classify_all(SpaceTokenizer::from_str(postfix, self.spacing))
            .map(|classified| classified.map(|(_, token)| token))
            .collect::<Result<Vec<_>, _>>()?;
        self.eval(&RPNExpr(tokens)).map(format_value)
    }

    /// Runs the whole pipeline on infix text.
    pub fn eval_infix(&self, infix: &str) -> Result<f64, CalcError> {
        self.eval(&ShuntingParser::parse_with(infix, self.spacing)?)
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, CalcError> {
        let mut operands = Vec::new();

        for (position, token) in rpn.iter().enumerate() {
            match token {
                Token::Operand(literal) => operands.push(parse_literal(literal)?),
                Token::Op(op) => {
                    let underflow = || CalcError::StackUnderflow { operator: *op, position };
                    let rhs = operands.pop().ok_or_else(underflow)?;
                    let lhs = operands.pop().ok_or_else(underflow)?;
                    let value = self.round(op.apply(lhs, rhs));
                    trace!("{} {} {} = {}", lhs, op, rhs, value);
                    operands.push(value);
                }
                Token::OParen | Token::CParen => {
                    return Err(CalcError::InvalidOperator(token.to_string()))
                }
            }
        }
        let result = match operands.as_slice() {
            [] => Err(CalcError::EmptyExpression),
            [value] => Ok(*value),
            leftover => Err(CalcError::LeftoverOperands(leftover.len())),
        };
        debug!("{} => {:?}", rpn, result);
        result
    }

    // Round half up to `precision` places, counters drift like 2.4000000000000004.
    // Values that can't be scaled (inf, NaN, huge) are returned as they are.
    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision.min(i32::MAX as u32) as i32);
        let scaled = value * scale;
        if !scaled.is_finite() {
            return value;
        }
        (scaled + 0.5).floor() / scale
    }
}

fn parse_literal(literal: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidOperator(literal.to_string());
    if !is_number(literal) {
        return Err(invalid());
    }
    literal.parse::<f64>().map_err(|_| invalid())
}

/// Shortest text that reads back as the same value: `2`, `2.4`, `-1`, `inf`.
/// Negative zero prints as `0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    format!("{}", value)
}

pub fn convert_infix_to_postfix(expression: &str) -> Result<String, CalcError> {
    Calculator::new().convert(expression)
}

pub fn evaluate(postfix: &str) -> Result<String, CalcError> {
    Calculator::new().evaluate(postfix)
}
