// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Persisted form of a `Dfa`.
//!
//! A `Dfa` is stored as a versioned JSON object:
//!
//! ```json
//! {
//!   "format": "thompson-dfa",
//!   "version": 1,
//!   "alphabet": ["a", "b"],
//!   "states": 3,
//!   "start": 0,
//!   "accepting": [1],
//!   "dead": 2,
//!   "transitions": [[1, 2], [2, 2], [2, 2]]
//! }
//! ```
//!
//! The alphabet is in code point order and `transitions` has one row per
//! state with one destination per alphabet symbol. `dead` may be `null`.
//! Unknown fields are ignored when loading.

use std::io::{self, Read, Write};

use alphabet::Alphabet;
use dfa::Dfa;
use error::StoreFormatError;
use nfa::StateId;
use serde_json;

const FORMAT: &str = "thompson-dfa";
const VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoredDfa {
    format: String,
    version: u32,
    alphabet: Vec<char>,
    states: usize,
    start: StateId,
    accepting: Vec<StateId>,
    #[serde(default)]
    dead: Option<StateId>,
    transitions: Vec<Vec<StateId>>,
}

/// Write `dfa` to `writer` in the persisted form.
pub fn save<W: Write>(dfa: &Dfa, writer: W) -> io::Result<()> {
    let stored = StoredDfa {
        format: FORMAT.to_string(),
        version: VERSION,
        alphabet: dfa.alphabet().symbols().to_vec(),
        states: dfa.state_count(),
        start: dfa.start(),
        accepting: dfa.accepting_states().collect(),
        dead: dfa.dead_state(),
        transitions: dfa.states().map(|state| dfa.row(state).to_vec()).collect(),
    };
    serde_json::to_writer_pretty(writer, &stored)?;
    Ok(())
}

/// Read a `Dfa` in the persisted form from `reader`.
///
/// Any structural problem (an unknown format or version, an alphabet that is
/// not strictly increasing, a ragged transition table, state ids out of range,
/// or a dead state that accepts or escapes) is an error.
pub fn load<R: Read>(reader: R) -> Result<Dfa, StoreFormatError> {
    let stored: StoredDfa = serde_json::from_reader(reader).map_err(StoreFormatError::decode)?;
    let dfa = validate(stored)?;
    debug!(
        "loaded dfa with {} states over {} symbols",
        dfa.state_count(),
        dfa.alphabet().len()
    );
    Ok(dfa)
}

fn validate(stored: StoredDfa) -> Result<Dfa, StoreFormatError> {
    if stored.format != FORMAT {
        return Err(StoreFormatError::invalid(format!(
            "unknown format \"{}\"",
            stored.format
        )));
    }
    if stored.version != VERSION {
        return Err(StoreFormatError::invalid(format!(
            "unsupported version {}",
            stored.version
        )));
    }

    let alphabet = Alphabet::from_sorted(stored.alphabet).ok_or_else(|| {
        StoreFormatError::invalid("alphabet is not strictly increasing")
    })?;

    let states = stored.states;
    let in_range = |state: StateId| state < states;

    if states == 0 {
        return Err(StoreFormatError::invalid("automaton has no states"));
    }
    if !in_range(stored.start) {
        return Err(StoreFormatError::invalid(format!(
            "start state {} is out of range",
            stored.start
        )));
    }
    if stored.transitions.len() != states {
        return Err(StoreFormatError::invalid(format!(
            "expected {} transition rows, found {}",
            states,
            stored.transitions.len()
        )));
    }

    let mut accepting = vec![false; states];
    for &state in &stored.accepting {
        if !in_range(state) {
            return Err(StoreFormatError::invalid(format!(
                "accepting state {} is out of range",
                state
            )));
        }
        accepting[state] = true;
    }

    let mut transitions = Vec::with_capacity(states * alphabet.len());
    for (state, row) in stored.transitions.into_iter().enumerate() {
        if row.len() != alphabet.len() {
            return Err(StoreFormatError::invalid(format!(
                "row {} has {} entries for {} symbols",
                state,
                row.len(),
                alphabet.len()
            )));
        }
        if let Some(&next) = row.iter().find(|&&next| !in_range(next)) {
            return Err(StoreFormatError::invalid(format!(
                "row {} refers to state {} which is out of range",
                state, next
            )));
        }
        transitions.extend(row);
    }

    if let Some(dead) = stored.dead {
        let width = alphabet.len();
        let absorbs = in_range(dead)
            && transitions[dead * width..(dead + 1) * width]
                .iter()
                .all(|&next| next == dead);
        if !absorbs || accepting[dead] {
            return Err(StoreFormatError::invalid(format!(
                "state {} is not a dead state",
                dead
            )));
        }
    }

    Ok(Dfa::from_parts(
        alphabet,
        stored.start,
        accepting,
        transitions,
        stored.dead,
    ))
}
