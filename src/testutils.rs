// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

// The utility types in this module are used to support tests in more than
// one other module.

use std::iter;

use pattern::{Class, Pattern};
use quickcheck::{empty_shrinker, Arbitrary, Gen};
use regex::Regex;

// Kept small so that random words hit the interesting paths of a pattern.
const SYMBOLS: &[char] = &['a', 'b', 'c', '0', '1'];

// Random words also use a symbol no generated pattern mentions.
const WORD_SYMBOLS: &[char] = &['a', 'b', 'c', '0', '1', 'x'];

const MAX_DEPTH: u32 = 4;

impl Arbitrary for Pattern {
    fn arbitrary(g: &mut Gen) -> Pattern {
        arbitrary_pattern(g, MAX_DEPTH)
    }

    fn shrink(&self) -> Box<Iterator<Item = Pattern>> {
        use pattern::Pattern::*;

        match *self {
            Literal(_) => empty_shrinker(),
            Class(ref class) => Box::new(class.iter().next().map(Literal).into_iter()),
            Concat(ref first, ref second) | Union(ref first, ref second) => {
                Box::new(vec![(**first).clone(), (**second).clone()].into_iter())
            }
            Star(ref inner) | Plus(ref inner) | Optional(ref inner) | Repeat(ref inner, _, _) => {
                Box::new(iter::once((**inner).clone()))
            }
        }
    }
}

fn below(g: &mut Gen, bound: u32) -> u32 {
    u32::arbitrary(g) % bound
}

fn symbol(g: &mut Gen) -> char {
    g.choose(SYMBOLS).cloned().unwrap_or('a')
}

fn arbitrary_pattern(g: &mut Gen, depth: u32) -> Pattern {
    let choice = if depth == 0 { below(g, 2) } else { below(g, 9) };
    let depth = depth.saturating_sub(1);

    match choice {
        0 => Pattern::Literal(symbol(g)),
        1 => {
            let members = 1 + below(g, 3);
            let class: Class = (0..members).map(|_| symbol(g)).collect();
            Pattern::Class(class)
        }
        2 | 8 => Pattern::concat(arbitrary_pattern(g, depth), arbitrary_pattern(g, depth)),
        3 => Pattern::union(arbitrary_pattern(g, depth), arbitrary_pattern(g, depth)),
        4 => Pattern::star(arbitrary_pattern(g, depth)),
        5 => Pattern::plus(arbitrary_pattern(g, depth)),
        6 => Pattern::optional(arbitrary_pattern(g, depth)),
        _ => {
            let min = below(g, 3);
            let max = if bool::arbitrary(g) {
                None
            } else {
                Some(min + below(g, 3))
            };
            Pattern::repeat(arbitrary_pattern(g, depth), min, max)
        }
    }
}

/// A short random word over `WORD_SYMBOLS`.
#[derive(Debug, Clone)]
pub struct TestWord(pub String);

impl Arbitrary for TestWord {
    fn arbitrary(g: &mut Gen) -> TestWord {
        let len = below(g, 8);
        let word = (0..len)
            .map(|_| g.choose(WORD_SYMBOLS).cloned().unwrap_or('x'))
            .collect();
        TestWord(word)
    }

    fn shrink(&self) -> Box<Iterator<Item = TestWord>> {
        Box::new(self.0.shrink().map(TestWord))
    }
}

/// An independent matcher for `pattern` built with the `regex` crate.
pub fn oracle(pattern: &Pattern) -> Option<Regex> {
    let mut syntax = String::from("^(?:");
    push_regex_syntax(pattern, &mut syntax);
    syntax.push_str(")$");
    Regex::new(&syntax).ok()
}

fn push_regex_syntax(pattern: &Pattern, out: &mut String) {
    use pattern::Pattern::*;

    let group = |inner: &Pattern, out: &mut String| {
        out.push_str("(?:");
        push_regex_syntax(inner, out);
        out.push(')');
    };

    match *pattern {
        Literal(c) => out.push(c),
        Class(ref class) => {
            out.push('[');
            out.extend(class.iter());
            out.push(']');
        }
        Concat(ref first, ref second) => {
            group(first, out);
            group(second, out);
        }
        Union(ref first, ref second) => {
            group(first, out);
            out.push('|');
            group(second, out);
        }
        Star(ref inner) => {
            group(inner, out);
            out.push('*');
        }
        Plus(ref inner) => {
            group(inner, out);
            out.push('+');
        }
        Optional(ref inner) => {
            group(inner, out);
            out.push('?');
        }
        Repeat(ref inner, min, max) => {
            group(inner, out);
            match max {
                Some(max) => out.push_str(&format!("{{{},{}}}", min, max)),
                None => out.push_str(&format!("{{{},}}", min)),
            }
        }
    }
}
