// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for deciding whether words belong to the language of a regular
//! expression.
//!
//! A pattern string is parsed into a `Pattern` tree, compiled into a
//! nondeterministic finite automaton (`Nfa`) by Thompson's construction,
//! and determinized into a `Dfa` by the subset construction. The `Dfa` is
//! then used to decide membership of each word in turn. A `Dfa` can also be
//! saved to and loaded from a self-describing JSON form through the `store`
//! module so that the parse and construction steps can be skipped.
//!
//! The supported pattern syntax is deliberately small: literals,
//! concatenation, alternation (`|`), grouping (`(...)`), character classes
//! with ranges (`[a-z0-9_]`), and the quantifiers `?`, `*`, `+`, `{m}`,
//! `{m,}`, `{,n}` and `{m,n}`.

#![deny(missing_docs)]

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
extern crate regex;

pub mod alphabet;
pub mod dfa;
pub mod nfa;
pub mod pattern;
pub mod store;

mod error;
mod parser;

#[cfg(test)]
mod testutils;

pub use dfa::Dfa;
pub use error::{StoreFormatError, SyntaxError, SyntaxErrorKind, UnsupportedSymbol};
pub use nfa::Nfa;
pub use parser::{parse, render};
pub use pattern::Pattern;

/// Parse `pattern` and build the `Dfa` that recognizes its language.
///
/// This runs the whole pipeline: parse, Thompson construction, and subset
/// construction.
pub fn compile(pattern: &str) -> Result<Dfa, SyntaxError> {
    let tree = parse(pattern)?;
    let nfa = Nfa::new(&tree);
    Ok(Dfa::new(&nfa))
}
