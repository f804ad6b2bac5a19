// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Pattern tree types.
//!
//! A `Pattern` is the parsed form of a pattern string. Each node owns its
//! children, so a tree is finite, acyclic and never shares a sub-tree between
//! two parents. A tree is usually obtained from `thompson::parse` (or through
//! `str::parse`), but the factory methods on `Pattern` can build one directly.
//!
//! The `Display` implementation is the canonical printer: parsing its output
//! gives a tree that denotes the same language, although not necessarily the
//! same shape (e.g. concatenation is re-associated to the left).
//!
//! This holds for every tree the parser can produce. The pattern syntax has
//! no escapes, so a tree built by hand with a metacharacter literal such as
//! `Literal('*')`, or a class holding `]`, prints text that does not parse.

mod class;

use std::fmt::{self, Display};
use std::str::FromStr;

use alphabet::Alphabet;
use error::SyntaxError;
use parser;

pub use self::class::{Class, Range, Ranges};

/// A node of a pattern tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches exactly the one character.
    Literal(char),
    /// Matches exactly one character from the class.
    Class(Class),
    /// Matches the first pattern immediately followed by the second.
    Concat(Box<Pattern>, Box<Pattern>),
    /// Matches either the first or the second pattern.
    Union(Box<Pattern>, Box<Pattern>),
    /// Matches zero or more repetitions of the inner pattern.
    Star(Box<Pattern>),
    /// Matches one or more repetitions of the inner pattern.
    Plus(Box<Pattern>),
    /// Matches zero or one occurrence of the inner pattern.
    Optional(Box<Pattern>),
    /// Matches at least `min` repetitions of the inner pattern and, when the
    /// maximum is `Some(max)`, at most `max` repetitions. A maximum of `None`
    /// is unbounded.
    Repeat(Box<Pattern>, u32, Option<u32>),
}

impl Pattern {
    /// Create a `Concat` pattern.
    pub fn concat(first: Pattern, second: Pattern) -> Pattern {
        Pattern::Concat(Box::new(first), Box::new(second))
    }

    /// Create a `Union` pattern.
    pub fn union(first: Pattern, second: Pattern) -> Pattern {
        Pattern::Union(Box::new(first), Box::new(second))
    }

    /// Create a `Star` pattern.
    pub fn star(inner: Pattern) -> Pattern {
        Pattern::Star(Box::new(inner))
    }

    /// Create a `Plus` pattern.
    pub fn plus(inner: Pattern) -> Pattern {
        Pattern::Plus(Box::new(inner))
    }

    /// Create an `Optional` pattern.
    pub fn optional(inner: Pattern) -> Pattern {
        Pattern::Optional(Box::new(inner))
    }

    /// Create a `Repeat` pattern.
    ///
    /// # Panics
    /// Panics if `max` is `Some` and is less than `min`.
    pub fn repeat(inner: Pattern, min: u32, max: Option<u32>) -> Pattern {
        assert!(
            max.map_or(true, |max| min <= max),
            "repetition minimum {} exceeds its maximum",
            min
        );
        Pattern::Repeat(Box::new(inner), min, max)
    }

    /// Predicate for patterns that the canonical printer never parenthesizes.
    pub fn is_atomic(&self) -> bool {
        match *self {
            Pattern::Literal(_) | Pattern::Class(_) => true,
            _ => false,
        }
    }

    /// The alphabet of the pattern: every symbol named by a literal or a
    /// character class.
    pub fn alphabet(&self) -> Alphabet {
        let mut symbols = Vec::new();
        self.collect_symbols(&mut symbols);
        symbols.into_iter().collect()
    }

    fn collect_symbols(&self, symbols: &mut Vec<char>) {
        use self::Pattern::*;

        match *self {
            Literal(c) => symbols.push(c),
            Class(ref class) => symbols.extend(class.iter()),
            Concat(ref first, ref second) | Union(ref first, ref second) => {
                first.collect_symbols(symbols);
                second.collect_symbols(symbols);
            }
            Star(ref inner) | Plus(ref inner) | Optional(ref inner) | Repeat(ref inner, _, _) => {
                inner.collect_symbols(symbols)
            }
        }
    }
}

impl FromStr for Pattern {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Pattern, SyntaxError> {
        parser::parse(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Pattern::*;

        match *self {
            Literal(c) => write!(f, "{}", c),
            Class(ref class) => write!(f, "{}", class),
            Concat(ref first, ref second) => {
                write_concat_operand(f, first)?;
                write_concat_operand(f, second)
            }
            Union(ref first, ref second) => {
                write_operand(f, first)?;
                f.write_str("|")?;
                write_operand(f, second)
            }
            Star(ref inner) => {
                write_operand(f, inner)?;
                f.write_str("*")
            }
            Plus(ref inner) => {
                write_operand(f, inner)?;
                f.write_str("+")
            }
            Optional(ref inner) => {
                write_operand(f, inner)?;
                f.write_str("?")
            }
            Repeat(ref inner, min, max) => {
                write_operand(f, inner)?;
                match max {
                    Some(max) if max == min => write!(f, "{{{}}}", min),
                    Some(max) if min == 0 => write!(f, "{{,{}}}", max),
                    Some(max) => write!(f, "{{{},{}}}", min, max),
                    None => write!(f, "{{{},}}", min),
                }
            }
        }
    }
}

// Operands of `|` and of the quantifiers are parenthesized unless atomic.
fn write_operand(f: &mut fmt::Formatter, pattern: &Pattern) -> fmt::Result {
    if pattern.is_atomic() {
        write!(f, "{}", pattern)
    } else {
        write!(f, "({})", pattern)
    }
}

// Juxtaposition binds tighter than `|` but is associative, so only a
// `Union` operand needs parentheses.
fn write_concat_operand(f: &mut fmt::Formatter, pattern: &Pattern) -> fmt::Result {
    match *pattern {
        Pattern::Union(_, _) => write!(f, "({})", pattern),
        _ => write!(f, "{}", pattern),
    }
}
