use crate::error::CalcError;
use crate::parser::{Operator, ShuntingParser};
use crate::rpneval::{evaluate, format_value, Calculator};
use lexers::Spacing;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval1() {
    assert_eq!(evaluate("3 4 + 5 -"), Ok(format!("2")));
    assert_eq!(evaluate("3 4 5 - +"), Ok(format!("2")));
    assert_eq!(evaluate("3 4 5 * +"), Ok(format!("23")));
    assert_eq!(evaluate("3 4 * 5 /"), Ok(format!("2.4")));
    assert_eq!(evaluate("1.5 -0.25 *"), Ok(format!("-0.375")));
}

#[test]
fn test_eval2() {
    let expr = ShuntingParser::parse_str("( 3 + 4 ) * 3").unwrap();
    fuzzy_eq!(Calculator::new().eval(&expr).unwrap(), 21.0);
    let expr = ShuntingParser::parse_str("-2 * ( 1.5 - 4 ) / 5").unwrap();
    fuzzy_eq!(Calculator::new().eval(&expr).unwrap(), 1.0);
    fuzzy_eq!(Calculator::new().eval_infix("1e3 / 8").unwrap(), 125.0);
}

#[test]
fn rounding() {
    assert_eq!(evaluate("1 3 /"), Ok(format!("0.3333")));
    assert_eq!(evaluate("2 3 /"), Ok(format!("0.6667")));
    assert_eq!(evaluate("-2 3 /"), Ok(format!("-0.6667")));
    let calc = Calculator::new().with_precision(2);
    assert_eq!(calc.evaluate("2 3 /"), Ok(format!("0.67")));
    // halves round up, also below zero
    let calc = Calculator::new().with_precision(0);
    assert_eq!(calc.evaluate("1 2 /"), Ok(format!("1")));
    assert_eq!(calc.evaluate("-1 2 /"), Ok(format!("0")));
    assert_eq!(calc.evaluate("-3 2 /"), Ok(format!("-1")));
}

#[test]
fn literals_are_not_rounded() {
    assert_eq!(evaluate("0.123456"), Ok(format!("0.123456")));
    assert_eq!(evaluate("0.123456 0 +"), Ok(format!("0.1235")));
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate("1 0 /"), Ok(format!("inf")));
    assert_eq!(evaluate("-1 0 /"), Ok(format!("-inf")));
    assert_eq!(evaluate("0 0 /"), Ok(format!("NaN")));
    assert_eq!(evaluate("1 0 / 1 +"), Ok(format!("inf")));
}

#[test]
fn invalid_operators() {
    assert_eq!(evaluate("3 4 %"), Err(CalcError::InvalidOperator(format!("%"))));
    assert_eq!(evaluate("3 4 ^"), Err(CalcError::InvalidOperator(format!("^"))));
    assert_eq!(evaluate("1 ( +"), Err(CalcError::InvalidOperator(format!("("))));
    assert_eq!(evaluate("inf 1 +"), Err(CalcError::InvalidOperator(format!("inf"))));
    assert_eq!(evaluate("x"), Err(CalcError::InvalidOperator(format!("x"))));
    assert_eq!(
        CalcError::InvalidOperator(format!("%")).to_string(),
        "The operator: % is invalid."
    );
}

#[test]
fn stack_underflow() {
    assert_eq!(evaluate("3 +"),
               Err(CalcError::StackUnderflow { operator: Operator::Add, position: 1 }));
    assert_eq!(evaluate("/"),
               Err(CalcError::StackUnderflow { operator: Operator::Divide, position: 0 }));
    assert_eq!(evaluate("1 2 + *"),
               Err(CalcError::StackUnderflow { operator: Operator::Multiply, position: 3 }));
}

#[test]
fn final_stack_size() {
    assert_eq!(evaluate(""), Err(CalcError::EmptyExpression));
    assert_eq!(evaluate("   "), Err(CalcError::EmptyExpression));
    assert_eq!(evaluate("1 2"), Err(CalcError::LeftoverOperands(2)));
    assert_eq!(evaluate("1 2 3 +"), Err(CalcError::LeftoverOperands(2)));
}

#[test]
fn strict_spacing() {
    let calc = Calculator::new().with_spacing(Spacing::Strict);
    assert_eq!(calc.spacing(), Spacing::Strict);
    assert_eq!(calc.evaluate("3  4 +"), Err(CalcError::MalformedSpacing { position: 1 }));
    assert_eq!(calc.evaluate("3 4 + "), Ok(format!("7")));
    assert_eq!(calc.convert("3 + 4"), Ok(format!("3 4 +")));
    assert_eq!(Calculator::new().evaluate("3  4 +"), Ok(format!("7")));
}

#[test]
fn repeatable() {
    let calc = Calculator::default();
    assert_eq!(calc.precision(), Calculator::DEFAULT_PRECISION);
    let postfix = calc.convert("1 / 3 + 2 * 7").unwrap();
    let first = calc.evaluate(&postfix).unwrap();
    let second = calc.evaluate(&postfix).unwrap();
    assert_eq!(first, "14.3333");
    assert_eq!(first, second);
}

#[test]
fn shared_across_threads() {
    let calc = Calculator::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=4)
            .map(|n| s.spawn(move || calc.eval_infix(&format!("{} * ( {} + 1 )", n, n))))
            .collect();
        for (n, handle) in (1..=4).zip(handles) {
            fuzzy_eq!(handle.join().unwrap().unwrap(), (n * (n + 1)) as f64);
        }
    });
}

#[test]
fn formatting() {
    assert_eq!(format_value(2.0), "2");
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(2.4), "2.4");
    assert_eq!(format_value(-1.0), "-1");
    assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
}
