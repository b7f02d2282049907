#![deny(warnings)]

use crate::helpers::WHITE;
use crate::scanner::Scanner;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Spacing {
    /// Any run of whitespace separates two tokens.
    #[default]
    Lenient,
    /// Every whitespace char is a separator on its own, so a run of them
    /// yields empty tokens. Trailing whitespace yields nothing.
    Strict,
}

// Splits input on whitespace, the separators are dropped
pub struct SpaceTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    spacing: Spacing,
}

impl<I: Iterator<Item=char>> SpaceTokenizer<I> {
    pub fn new(source: I, spacing: Spacing) -> Self {
        SpaceTokenizer{src: Scanner::new(source), spacing}
    }

    pub fn spacing(&self) -> Spacing { self.spacing }

    fn lenient_token(&mut self) -> Option<String> {
        self.src.skip_all(WHITE);
        self.src.ignore();
        if self.src.until_any(WHITE) {
            Some(self.src.extract_string())
        } else {
            None
        }
    }

    fn strict_token(&mut self) -> Option<String> {
        if self.src.until_any(WHITE) {
            let token = self.src.extract_string();
            self.src.accept_any(WHITE);
            self.src.ignore();
            return Some(token);
        }
        // sitting on a separator: empty token unless only whitespace is left
        self.src.accept_any(WHITE)?;
        self.src.ignore();
        let backtrack = self.src.buffer_pos();
        self.src.skip_all(WHITE);
        self.src.peek()?;
        self.src.set_buffer_pos(backtrack);
        Some(String::new())
    }
}

impl<'a> SpaceTokenizer<std::str::Chars<'a>> {
    pub fn from_str(src: &'a str, spacing: Spacing) -> Self {
        SpaceTokenizer::new(src.chars(), spacing)
    }
}

impl<I: Iterator<Item=char>> Iterator for SpaceTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        match self.spacing {
            Spacing::Lenient => self.lenient_token(),
            Spacing::Strict => self.strict_token(),
        }
    }
}
