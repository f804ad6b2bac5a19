// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use error::SyntaxError;
use error::SyntaxErrorKind::{self, *};
use pattern::{Class, Pattern, Range};

/// A specialized `Result` type for parsing patterns.
pub type Result<T> = ::std::result::Result<T, SyntaxError>;

/// Parse a pattern string into a `Pattern` tree.
///
/// The grammar, from lowest to highest precedence, is alternation (`|`, left
/// associative), concatenation (juxtaposition), the postfix quantifiers `?`,
/// `*`, `+`, `{m}`, `{m,}`, `{,n}` and `{m,n}`, and atoms. An atom is a
/// literal character, a character class such as `[aA-Zb0-9c]`, or a
/// parenthesized pattern. A quantifier may not directly follow another
/// quantifier; `(a*)*` is accepted but `a**` is not.
///
/// The characters `()[]{}|*+?` are metacharacters outside of a class; every
/// other character is a literal. There are no escapes.
pub fn parse(pattern: &str) -> Result<Pattern> {
    let mut parser = Parser::new(pattern);
    let tree = parser.alternation()?;

    match parser.peek() {
        None => Ok(tree),
        Some(')') => Err(parser.error(Unbalanced)),
        Some(_) => Err(parser.error(TrailingInput)),
    }
}

/// Render a `Pattern` tree in canonical form.
///
/// Operands of `|` and of the quantifiers are parenthesized unless they are
/// a literal or a character class; an alternation is parenthesized when it
/// is an operand of a concatenation. If `pattern` came from `parse`, parsing
/// the result gives a tree that denotes the same language.
///
/// There are no escapes, so a literal metacharacter (one of `()[]{}|*+?`)
/// outside a class, or a `]` inside one, is printed as is and the result
/// will not parse.
pub fn render(pattern: &Pattern) -> String {
    pattern.to_string()
}

struct Parser<'a> {
    pattern: &'a str,
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

fn is_quantifier(c: char) -> bool {
    match c {
        '*' | '+' | '?' | '{' => true,
        _ => false,
    }
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Parser<'a> {
        Parser {
            pattern,
            chars: pattern.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).cloned()
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).cloned()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        self.error_at(self.pos, kind)
    }

    fn error_at(&self, offset: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(self.pattern, offset, kind)
    }

    fn alternation(&mut self) -> Result<Pattern> {
        let mut tree = self.concatenation()?;
        while self.eat('|') {
            let rhs = self.concatenation()?;
            tree = Pattern::union(tree, rhs);
        }
        Ok(tree)
    }

    fn concatenation(&mut self) -> Result<Pattern> {
        let mut tree: Option<Pattern> = None;
        loop {
            match self.peek() {
                None | Some('|') | Some(')') => break,
                Some(_) => {}
            }

            let item = self.repetition()?;
            tree = Some(match tree {
                None => item,
                Some(lhs) => Pattern::concat(lhs, item),
            });
        }

        match (tree, self.peek()) {
            (Some(tree), _) => Ok(tree),
            (None, None) if self.depth > 0 => Err(self.error(Unbalanced)),
            (None, Some(')')) if self.depth == 0 => Err(self.error(Unbalanced)),
            (None, _) => Err(self.error(EmptyOperand)),
        }
    }

    fn repetition(&mut self) -> Result<Pattern> {
        let atom = self.atom()?;

        let tree = match self.peek() {
            Some('*') => {
                self.bump();
                Pattern::star(atom)
            }
            Some('+') => {
                self.bump();
                Pattern::plus(atom)
            }
            Some('?') => {
                self.bump();
                Pattern::optional(atom)
            }
            Some('{') => {
                let (min, max) = self.bound()?;
                Pattern::repeat(atom, min, max)
            }
            _ => return Ok(atom),
        };

        match self.peek() {
            Some(c) if is_quantifier(c) => Err(self.error(StackedQuantifier)),
            _ => Ok(tree),
        }
    }

    fn atom(&mut self) -> Result<Pattern> {
        match self.peek() {
            None => Err(self.error(UnexpectedEnd)),
            Some('(') => self.group(),
            Some('[') => self.class(),
            Some(']') | Some('}') => Err(self.error(Unbalanced)),
            Some(c) if is_quantifier(c) => Err(self.error(EmptyOperand)),
            Some(c) => {
                self.bump();
                Ok(Pattern::Literal(c))
            }
        }
    }

    fn group(&mut self) -> Result<Pattern> {
        let open = self.pos;
        self.bump();
        self.depth += 1;

        let inner = self.alternation()?;
        if !self.eat(')') {
            return Err(self.error_at(open, Unbalanced));
        }

        self.depth -= 1;
        Ok(inner)
    }

    fn class(&mut self) -> Result<Pattern> {
        let open = self.pos;
        self.bump();

        let mut class = Class::new();
        loop {
            let member_pos = self.pos;
            let lo = match self.bump() {
                None => return Err(self.error_at(open, Unbalanced)),
                Some(']') => break,
                Some(c) => c,
            };

            // a `-` right before the closing `]` is a literal member
            let is_range = self.peek() == Some('-') && match self.peek_second() {
                None | Some(']') => false,
                Some(_) => true,
            };

            if is_range {
                self.bump();
                let hi = match self.bump() {
                    Some(hi) => hi,
                    None => return Err(self.error(UnexpectedEnd)),
                };
                if hi < lo {
                    return Err(self.error_at(member_pos, ClassRangeOrder));
                }
                class.insert_range(Range::new(lo, hi));
            } else {
                class.insert(lo);
            }
        }

        if class.is_empty() {
            Err(self.error_at(open, EmptyClass))
        } else {
            Ok(Pattern::Class(class))
        }
    }

    fn bound(&mut self) -> Result<(u32, Option<u32>)> {
        let open = self.pos;
        self.bump();

        let min = self.number(open)?;
        let (min, max) = if self.eat(',') {
            match (min, self.number(open)?) {
                (None, None) => return Err(self.malformed_bound(open)),
                (None, Some(max)) => (0, Some(max)),
                (Some(min), max) => (min, max),
            }
        } else {
            match min {
                Some(min) => (min, Some(min)),
                None => return Err(self.malformed_bound(open)),
            }
        };

        if !self.eat('}') {
            return Err(self.malformed_bound(open));
        }

        match max {
            Some(max) if max < min => Err(self.error_at(open, BoundOrder)),
            _ => Ok((min, max)),
        }
    }

    fn number(&mut self, open: usize) -> Result<Option<u32>> {
        let mut value: Option<u32> = None;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            self.bump();
            value = Some(
                value
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| self.error_at(open, MalformedBound))?,
            );
        }
        Ok(value)
    }

    fn malformed_bound(&self, open: usize) -> SyntaxError {
        match self.peek() {
            None => self.error(UnexpectedEnd),
            Some(_) => self.error_at(open, MalformedBound),
        }
    }
}
