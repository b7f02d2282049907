#![deny(warnings)]

use crate::scanner::Scanner;

pub(crate) static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/*
 * The caller is expected to set up the scanner for a clean start,
 * ie: call scanner.ignore() before scanning.
 */

// scan numbers like [+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?
pub fn scan_number<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.buffer_pos();
    // optional sign
    scanner.accept_any(&['+', '-']);
    // digits are needed on at least one side of the point
    let int_part = scanner.skip_all(DIGITS);
    let frac_part = scanner.accept(&'.').is_some() && scanner.skip_all(DIGITS);
    if !int_part && !frac_part {
        scanner.set_buffer_pos(backtrack);
        return None;
    }
    // check for exponent part
    let backtrack = scanner.buffer_pos();
    if scanner.accept_any(&['e', 'E']).is_some() {
        scanner.accept_any(&['+', '-']);
        if !scanner.skip_all(DIGITS) {
            scanner.set_buffer_pos(backtrack);
        }
    }
    Some(scanner.extract_string())
}

// A token is a number only if the literal spans all of it
pub fn is_number(token: &str) -> bool {
    let mut scanner = Scanner::new(token.chars());
    scan_number(&mut scanner).is_some() && scanner.peek().is_none()
}

///////////////////////////////////////////////////////////////////////////////
