// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! The finite alphabet over which automata operate.

use std::iter::FromIterator;
use std::slice;

/// The set of symbols an automaton knows about.
///
/// The alphabet is closed: it contains exactly the symbols mentioned by the
/// literals and character classes of a pattern. Each symbol has a dense
/// index (its position in code point order) that is used as the column of
/// a transition table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from symbols that are already sorted and unique.
    ///
    /// Returns `None` if `symbols` is not strictly increasing.
    pub fn from_sorted(symbols: Vec<char>) -> Option<Alphabet> {
        if symbols.windows(2).all(|pair| pair[0] < pair[1]) {
            Some(Alphabet { symbols })
        } else {
            None
        }
    }

    /// The number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Predicate for an alphabet with no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The dense index of `c`, or `None` if `c` is outside the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.binary_search(&c).ok()
    }

    /// Predicate for membership of `c` in the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// The symbols in code point order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Iterate over the symbols in code point order.
    pub fn iter(&self) -> slice::Iter<char> {
        self.symbols.iter()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut symbols: Vec<char> = iter.into_iter().collect();
        symbols.sort();
        symbols.dedup();
        Alphabet { symbols }
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a char;
    type IntoIter = slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
