//! Single-pass scanner for `key=value` pairs
//!
//! The scanner walks the input once, left to right. Each [`State`] has its
//! own transition method; [`Scanner::step`] dispatches to it and returns the
//! next state, so the machine can be driven one transition at a time.
//!
//! Offsets are character indices. Errors raised at end of input, and the
//! offset of an [`InvalidKey`](ParseError::InvalidKey) rejected on the final
//! pair, are clamped to the index of the last character.

use core::ops::Range;

use tracing::{debug, trace};

use crate::decode::grammar::{ASSIGNMENT, QUOTE, is_key_char, is_valid_key, is_whitespace};
use crate::decode::validation::KeyPolicy;
use crate::error::ParseError;
use crate::parsed::Parsed;

/// Position of the scanner within the pair grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    SeekKeyStart,
    CollectingKey,
    SeekAssignment,
    SeekValueStart,
    CollectingUnquotedValue,
    CollectingQuotedValue,
    Commit,
    Done,
}

/// Scan state of one parse: cursor, spans of the pair in progress and the
/// pairs committed so far.
pub struct Scanner<'src, 'p, P: ?Sized> {
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Byte position of `remaining` in `source`.
    pos: usize,
    /// Character index of `remaining` in `source`.
    offset: usize,
    /// Byte span of the key being scanned.
    key: Range<usize>,
    /// Byte span of the value being scanned, quotes excluded.
    value: Range<usize>,
    /// Character index of the `=` of the current pair.
    assignment: usize,
    policy: &'p P,
    parsed: Parsed,
}

impl<'src, 'p, P: KeyPolicy + ?Sized> Scanner<'src, 'p, P> {
    pub fn new(source: &'src str, policy: &'p P) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
            offset: 0,
            key: 0..0,
            value: 0..0,
            assignment: 0,
            policy,
            parsed: Parsed::new(),
        }
    }

    /// Runs the machine until [`State::Done`] or the first error.
    pub fn run(mut self) -> Result<Parsed, ParseError> {
        let mut state = State::SeekKeyStart;
        while state != State::Done {
            trace!(?state, offset = self.offset, "scan");
            state = self.step(state).inspect_err(|e| debug!(error = %e, "parse failed"))?;
        }
        Ok(self.parsed)
    }

    /// Performs the transition out of `state`.
    pub fn step(&mut self, state: State) -> Result<State, ParseError> {
        match state {
            State::SeekKeyStart => self.seek_key_start(),
            State::CollectingKey => self.collect_key(),
            State::SeekAssignment => self.seek_assignment(),
            State::SeekValueStart => self.seek_value_start(),
            State::CollectingUnquotedValue => Ok(self.collect_unquoted_value()),
            State::CollectingQuotedValue => self.collect_quoted_value(),
            State::Commit => self.commit(),
            State::Done => Ok(State::Done),
        }
    }

    /// Character index of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Pairs committed so far.
    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    pub fn into_parsed(self) -> Parsed {
        self.parsed
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.offset += 1;
        self.remaining = &self.source[self.pos..];
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Index of the last character of the input. Only meaningful once the
    /// input is exhausted.
    fn last_offset(&self) -> usize {
        debug_assert!(self.remaining.is_empty());
        self.offset.saturating_sub(1)
    }

    /// Index of the next character, or of the last one once input is exhausted.
    fn boundary_offset(&self) -> usize {
        if self.remaining.is_empty() {
            self.last_offset()
        } else {
            self.offset
        }
    }

    fn current_key(&self) -> &'src str {
        &self.source[self.key.clone()]
    }

    fn seek_key_start(&mut self) -> Result<State, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Ok(State::Done),
            Some(c) if is_key_char(c) => {
                self.key = self.pos..self.pos;
                Ok(State::CollectingKey)
            }
            Some(_) => Err(ParseError::MissingKey { offset: self.offset }),
        }
    }

    fn collect_key(&mut self) -> Result<State, ParseError> {
        while self.peek().is_some_and(is_key_char) {
            self.advance();
        }
        self.key.end = self.pos;
        match self.peek() {
            None => Err(ParseError::IncompleteKeyValuePair {
                offset: self.last_offset(),
            }),
            Some(_) => Ok(State::SeekAssignment),
        }
    }

    fn seek_assignment(&mut self) -> Result<State, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(ASSIGNMENT) => {
                self.assignment = self.offset;
                self.advance();
                Ok(State::SeekValueStart)
            }
            Some(_) => Err(ParseError::MissingAssignmentOperator { offset: self.offset }),
            None => Err(ParseError::MissingAssignmentOperator {
                offset: self.last_offset(),
            }),
        }
    }

    fn seek_value_start(&mut self) -> Result<State, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::MissingValue {
                key: self.current_key().to_string(),
                offset: self.assignment,
            }),
            Some(QUOTE) => {
                self.advance();
                self.value = self.pos..self.pos;
                Ok(State::CollectingQuotedValue)
            }
            Some(_) => {
                self.value = self.pos..self.pos;
                Ok(State::CollectingUnquotedValue)
            }
        }
    }

    fn collect_unquoted_value(&mut self) -> State {
        while self.peek().is_some_and(|c| !is_whitespace(c)) {
            self.advance();
        }
        self.value.end = self.pos;
        State::Commit
    }

    fn collect_quoted_value(&mut self) -> Result<State, ParseError> {
        loop {
            match self.peek() {
                None => {
                    return Err(ParseError::MissingEndQuote {
                        key: self.current_key().to_string(),
                        offset: self.last_offset(),
                    });
                }
                Some(QUOTE) => {
                    self.value.end = self.pos;
                    self.advance();
                    return Ok(State::Commit);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn commit(&mut self) -> Result<State, ParseError> {
        let key = self.current_key();
        debug_assert!(is_valid_key(key));
        if !self.policy.accepts(key) {
            return Err(ParseError::InvalidKey {
                key: key.to_string(),
                offset: self.boundary_offset(),
            });
        }
        let value = &self.source[self.value.clone()];
        debug!(key = key, value = value, "commit");
        self.parsed.insert(key, value);
        Ok(State::SeekKeyStart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::validation::{AllowList, Permissive};

    fn drive<P: KeyPolicy>(scanner: &mut Scanner<'_, '_, P>, states: &[State]) {
        let mut state = states[0];
        for expected in &states[1..] {
            state = scanner.step(state).unwrap();
            assert_eq!(state, *expected);
        }
    }

    #[test]
    fn unquoted_pair_visits_every_state() {
        let mut scanner = Scanner::new(" key = value ", &Permissive);
        drive(
            &mut scanner,
            &[
                State::SeekKeyStart,
                State::CollectingKey,
                State::SeekAssignment,
                State::SeekValueStart,
                State::CollectingUnquotedValue,
                State::Commit,
                State::SeekKeyStart,
                State::Done,
            ],
        );
        assert_eq!(scanner.parsed().get("key"), Some("value"));
    }

    #[test]
    fn quote_selects_quoted_collection() {
        let mut scanner = Scanner::new("k=\"a b\"", &Permissive);
        drive(
            &mut scanner,
            &[
                State::SeekKeyStart,
                State::CollectingKey,
                State::SeekAssignment,
                State::SeekValueStart,
                State::CollectingQuotedValue,
                State::Commit,
            ],
        );
        // closing quote consumed
        assert_eq!(scanner.offset(), 7);
        assert!(scanner.parsed().is_empty());
        assert_eq!(scanner.step(State::Commit), Ok(State::SeekKeyStart));
        assert_eq!(scanner.into_parsed().get("k"), Some("a b"));
    }

    #[test]
    fn collecting_key_stops_at_first_non_key_char() {
        let mut scanner = Scanner::new("ab-c=1", &Permissive);
        drive(&mut scanner, &[State::SeekKeyStart, State::CollectingKey, State::SeekAssignment]);
        assert_eq!(scanner.offset(), 2);
        assert_eq!(
            scanner.step(State::SeekAssignment),
            Err(ParseError::MissingAssignmentOperator { offset: 2 })
        );
    }

    #[test]
    fn done_is_terminal() {
        let mut scanner = Scanner::new("", &Permissive);
        assert_eq!(scanner.step(State::SeekKeyStart), Ok(State::Done));
        assert_eq!(scanner.step(State::Done), Ok(State::Done));
    }

    #[test]
    fn commit_offset_points_at_next_char() {
        let list = AllowList::new(["name"], true);
        let err = Scanner::new("name=john color=blue age=23", &list).run().unwrap_err();
        assert_eq!(err, ParseError::InvalidKey { key: "color".into(), offset: 20 });
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let err = Scanner::new("k=\"héllo wörld", &Permissive).run().unwrap_err();
        assert_eq!(err, ParseError::MissingEndQuote { key: "k".into(), offset: 13 });

        let err = Scanner::new("k=é =v", &Permissive).run().unwrap_err();
        assert_eq!(err, ParseError::MissingKey { offset: 4 });
    }

    #[test]
    fn end_of_input_offsets_after_multibyte_text() {
        let list = AllowList::new(["k"], true);
        // rejected final pair clamps to the last character
        let err = Scanner::new("k=ü name=çà", &list).run().unwrap_err();
        assert_eq!(err, ParseError::InvalidKey { key: "name".into(), offset: 10 });

        let err = Scanner::new("k=\"日本\" name=\"語", &list).run().unwrap_err();
        assert_eq!(err, ParseError::MissingEndQuote { key: "name".into(), offset: 13 });

        let err = Scanner::new("k=é é", &Permissive).run().unwrap_err();
        assert_eq!(err, ParseError::MissingKey { offset: 4 });

        let err = Scanner::new("k=日 key", &Permissive).run().unwrap_err();
        assert_eq!(err, ParseError::IncompleteKeyValuePair { offset: 6 });
    }
}
