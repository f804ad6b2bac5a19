// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::path::Path;

use failure::Error;
use quicli::fs::read_file;
use thompson::Dfa;

/// The membership verdict for one word, printed as `True` or `False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Member,
    NotMember,
}

impl From<bool> for Verdict {
    fn from(is_member: bool) -> Verdict {
        if is_member {
            Verdict::Member
        } else {
            Verdict::NotMember
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Verdict::Member => f.write_str("True"),
            Verdict::NotMember => f.write_str("False"),
        }
    }
}

/// Read one word per line. Line terminators are not part of the word and an
/// empty line is the empty word.
pub fn read_words(path: &Path) -> Result<Vec<String>, Error> {
    debug!("reading words from {}", path.display());

    let contents = read_file(path)
        .map_err(|err| err.context(format!("unable to read words file {}", path.display())))?;
    Ok(split_words(&contents))
}

fn split_words(contents: &str) -> Vec<String> {
    contents.lines().map(String::from).collect()
}

/// Write one verdict line per word.
pub fn write_verdicts<W: Write>(dfa: &Dfa, words: &[String], out: &mut W) -> io::Result<()> {
    for word in words {
        let verdict = Verdict::from(dfa.is_match(word));
        trace!("{:?}: {}", word, verdict);
        writeln!(out, "{}", verdict)?;
    }
    Ok(())
}
