// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::char;
use std::collections::btree_set::{self, BTreeSet};
use std::fmt::{self, Display};
use std::iter::{FromIterator, Peekable};

/// A non-empty set of characters matched by a character class.
///
/// The class is the union of its members; adding a member twice is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Class {
    members: BTreeSet<char>,
}

/// An inclusive range of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: char,
    end: char,
}

/// An iterator over the maximal runs of consecutive members of a class.
///
/// This is the return type of the `Class::ranges()` method.
pub struct Ranges<'a> {
    inner: Peekable<btree_set::Iter<'a, char>>,
}

impl Class {
    /// Create an empty class.
    pub fn new() -> Class {
        Class {
            members: BTreeSet::new(),
        }
    }

    /// Add a single member to the class.
    pub fn insert(&mut self, c: char) {
        self.members.insert(c);
    }

    /// Add every character of `range` to the class.
    pub fn insert_range(&mut self, range: Range) {
        self.members.extend(range.start..=range.end);
    }

    /// Check if the class contains the character `c`.
    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the class has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members in code point order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = char> + 'a {
        self.members.iter().cloned()
    }

    /// Get an iterator over the maximal ranges of consecutive members.
    ///
    /// The ranges are non-overlapping, non-adjacent and in increasing order.
    pub fn ranges(&self) -> Ranges {
        Ranges {
            inner: self.members.iter().peekable(),
        }
    }
}

impl FromIterator<char> for Class {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        Class {
            members: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Range> for Class {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Range>,
    {
        let mut class = Class::new();
        for range in iter {
            class.insert_range(range);
        }
        class
    }
}

// Members are printed in code point order with runs of three or more
// collapsed to `lo-hi`. A `-` member goes first so it cannot be read as a
// range operator.
impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        if self.contains('-') {
            f.write_str("-")?;
        }

        let rest: Class = self.iter().filter(|&c| c != '-').collect();
        for range in rest.ranges() {
            match (range.end as u32) - (range.start as u32) {
                0 => write!(f, "{}", range.start)?,
                1 => write!(f, "{}{}", range.start, range.end)?,
                _ => write!(f, "{}-{}", range.start, range.end)?,
            }
        }
        f.write_str("]")
    }
}

impl<'a> Iterator for Ranges<'a> {
    type Item = Range;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.inner.next()?;
        let mut end = start;
        while let Some(&&next) = self.inner.peek() {
            if successor(end) != Some(next) {
                break;
            }
            end = next;
            self.inner.next();
        }
        Some(Range { start, end })
    }
}

fn successor(c: char) -> Option<char> {
    char::from_u32(c as u32 + 1)
}

impl Range {
    /// Creates a new range of characters.
    ///
    /// If `end` is less than the `start` then they will be reversed.
    pub fn new(start: char, end: char) -> Range {
        if end < start {
            Range {
                start: end,
                end: start,
            }
        } else {
            Range { start, end }
        }
    }

    /// The start of the range of characters.
    ///
    /// The start is included in the range.
    pub fn start(&self) -> char {
        self.start
    }

    /// The end of the range of characters.
    ///
    /// The end is included in the range.
    pub fn end(&self) -> char {
        self.end
    }
}
