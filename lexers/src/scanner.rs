#![deny(warnings)]

// Cursor over an iterator with unbounded lookahead. Items pulled from the
// source stay in `lookahead` until `ignore`/`extract_string` drops the
// accepted prefix, so a saved `buffer_pos` can always be restored.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    lookahead: Vec<I::Item>,
    // accepted items at the front of lookahead
    consumed: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.peek()?;
        self.consumed += 1;
        Some(item)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, lookahead: Vec::new(), consumed: 0}
    }

    pub fn buffer_pos(&self) -> usize { self.consumed }

    // Rewind (or replay) to a position taken since the last ignore
    pub fn set_buffer_pos(&mut self, pos: usize) -> bool {
        if pos > self.lookahead.len() {
            return false;
        }
        self.consumed = pos;
        true
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.consumed == self.lookahead.len() {
            let item = self.src.next()?;
            self.lookahead.push(item);
        }
        self.lookahead.get(self.consumed).cloned()
    }

    // Drop everything accepted so far
    pub fn ignore(&mut self) {
        self.lookahead.drain(..self.consumed);
        self.consumed = 0;
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        match self.peek() {
            Some(next) if any.contains(&next) => self.next(),
            _ => None,
        }
    }

    // Accept a run of items from 'over', returns whether any matched
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let start = self.consumed;
        while self.accept_any(over).is_some() {}
        self.consumed > start
    }

    // Accept items up to the next one in 'any' or EOF,
    // returns whether any were accepted
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let start = self.consumed;
        while let Some(next) = self.peek() {
            if any.contains(&next) { break; }
            self.consumed += 1;
        }
        self.consumed > start
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    // Take the accepted chars out as a String
    pub fn extract_string(&mut self) -> String {
        let accepted = self.lookahead.drain(..self.consumed).collect();
        self.consumed = 0;
        accepted
    }
}
