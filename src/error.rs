// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};

use failure::Fail;
use serde_json;

/// The reasons a pattern string can fail to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `(` or `[` without its closing partner, or a stray `)`.
    Unbalanced,
    /// The pattern ended where an atom, a bound or a class member was expected.
    UnexpectedEnd,
    /// An alternative, a group or the whole pattern is empty, or a quantifier
    /// has nothing to apply to.
    EmptyOperand,
    /// A quantifier directly follows another quantifier (e.g. `a**`).
    StackedQuantifier,
    /// A counted repetition is not one of `{m}`, `{m,}`, `{,n}`, `{m,n}`.
    MalformedBound,
    /// A counted repetition with `m > n`.
    BoundOrder,
    /// A character class with no members.
    EmptyClass,
    /// A character class range with `lo > hi`.
    ClassRangeOrder,
    /// Input remained after a complete pattern was parsed.
    TrailingInput,
}

impl Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::SyntaxErrorKind::*;

        let message = match *self {
            Unbalanced => "unbalanced parentheses or brackets",
            UnexpectedEnd => "unexpected end of pattern",
            EmptyOperand => "missing operand",
            StackedQuantifier => "quantifiers cannot be stacked without parentheses",
            MalformedBound => "malformed repetition bound",
            BoundOrder => "repetition minimum exceeds its maximum",
            EmptyClass => "empty character class",
            ClassRangeOrder => "character class range is out of order",
            TrailingInput => "unexpected input after pattern",
        };
        f.write_str(message)
    }
}

/// The error type for parsing a pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pattern: String,
    offset: usize,
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub(crate) fn new(pattern: &str, offset: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            pattern: pattern.to_string(),
            offset,
            kind,
        }
    }

    /// The reason the pattern was rejected.
    pub fn kind(&self) -> SyntaxErrorKind {
        self.kind
    }

    /// The character offset into the pattern at which the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The rejected pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid pattern (\"{}\") at offset {}: {}",
            self.pattern, self.offset, self.kind
        )
    }
}

impl Fail for SyntaxError {}

/// A word contained a symbol that is not in the alphabet of the automaton.
///
/// This is never fatal: the word is simply not a member of the language.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
#[fail(display = "The symbol {:?} is not in the automaton's alphabet.", _0)]
pub struct UnsupportedSymbol(pub char);

/// The error type for loading a persisted automaton.
#[derive(Debug)]
pub struct StoreFormatError {
    message: String,
    cause: Option<serde_json::Error>,
}

impl StoreFormatError {
    pub(crate) fn decode(cause: serde_json::Error) -> StoreFormatError {
        StoreFormatError {
            message: "unable to decode automaton".to_string(),
            cause: Some(cause),
        }
    }

    pub(crate) fn invalid<S: Into<String>>(message: S) -> StoreFormatError {
        StoreFormatError {
            message: message.into(),
            cause: None,
        }
    }

    /// A description of what was wrong with the persisted automaton.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for StoreFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid persisted automaton: {}", self.message)
    }
}

impl Fail for StoreFormatError {
    fn cause(&self) -> Option<&Fail> {
        match self.cause {
            Some(ref cause) => Some(cause),
            None => None,
        }
    }
}
