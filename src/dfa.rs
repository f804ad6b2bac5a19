// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Deterministic finite automata built by the subset construction.
//!
//! The transition function of a `Dfa` is total over its alphabet: every
//! (state, symbol) pair has exactly one destination. Pairs that lead nowhere
//! in the source `Nfa` go to a dead state, which is non-accepting and loops
//! back to itself on every symbol. Symbols outside of the alphabet are never
//! accepted.

use std::collections::{HashMap, VecDeque};
use std::iter;

use alphabet::Alphabet;
use error::UnsupportedSymbol;
use nfa::{Nfa, StateId};

/// A deterministic finite automaton over a closed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    alphabet: Alphabet,
    start: StateId,
    accepting: Vec<bool>,
    // row-major, one row of `alphabet.len()` destinations per state
    transitions: Vec<StateId>,
    dead: Option<StateId>,
}

impl Dfa {
    /// Determinize `nfa` using the subset construction.
    ///
    /// Each state of the result stands for a set of `nfa` states and is
    /// accepting exactly when that set contains the accepting state of `nfa`.
    /// The automaton is not minimized.
    pub fn new(nfa: &Nfa) -> Dfa {
        let dfa = Builder::new(nfa).build();
        debug!(
            "dfa has {} states over an alphabet of {} symbols (dead state: {:?})",
            dfa.state_count(),
            dfa.alphabet.len(),
            dfa.dead
        );
        dfa
    }

    // The caller is responsible for the table being total and in range.
    pub(crate) fn from_parts(
        alphabet: Alphabet,
        start: StateId,
        accepting: Vec<bool>,
        transitions: Vec<StateId>,
        dead: Option<StateId>,
    ) -> Dfa {
        Dfa {
            alphabet,
            start,
            accepting,
            transitions,
            dead,
        }
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The alphabet over which the transition function is total.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The number of states, including the dead state if there is one.
    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    /// Iterate over the identifiers of all states.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        0..self.state_count()
    }

    /// Predicate for accepting states.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.get(state).cloned().unwrap_or(false)
    }

    /// Iterate over the identifiers of the accepting states.
    pub fn accepting_states<'a>(&'a self) -> impl Iterator<Item = StateId> + 'a {
        self.states().filter(move |&state| self.accepting[state])
    }

    /// The dead state, if any (state, symbol) pair of the source automaton led
    /// nowhere.
    pub fn dead_state(&self) -> Option<StateId> {
        self.dead
    }

    /// The destinations of `state`, one per alphabet symbol in alphabet order.
    pub fn row(&self, state: StateId) -> &[StateId] {
        let width = self.alphabet.len();
        &self.transitions[state * width..(state + 1) * width]
    }

    /// The destination of the transition from `state` on `symbol`.
    ///
    /// Returns `None` if `symbol` is outside of the alphabet.
    pub fn next(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.alphabet
            .index_of(symbol)
            .map(|index| self.transitions[state * self.alphabet.len() + index])
    }

    /// Run `word` through the automaton and return the state it ends in.
    ///
    /// Fails on the first symbol of `word` that is outside of the alphabet.
    pub fn walk(&self, word: &str) -> Result<StateId, UnsupportedSymbol> {
        word.chars().try_fold(self.start, |state, c| {
            self.next(state, c).ok_or(UnsupportedSymbol(c))
        })
    }

    /// Decide whether `word` is in the language of the automaton.
    ///
    /// A word containing a symbol outside of the alphabet is never a member.
    /// The empty word is a member exactly when the start state is accepting.
    pub fn is_match(&self, word: &str) -> bool {
        match self.walk(word) {
            Ok(state) => self.is_accepting(state),
            Err(err) => {
                trace!("rejecting {:?}: {}", word, err);
                false
            }
        }
    }
}

struct Builder<'a> {
    nfa: &'a Nfa,
    ids: HashMap<Vec<StateId>, StateId>,
    subsets: Vec<Vec<StateId>>,
    worklist: VecDeque<StateId>,
    accepting: Vec<bool>,
    transitions: Vec<StateId>,
    dead: Option<StateId>,
}

impl<'a> Builder<'a> {
    fn new(nfa: &'a Nfa) -> Builder<'a> {
        Builder {
            nfa,
            ids: HashMap::new(),
            subsets: Vec::new(),
            worklist: VecDeque::new(),
            accepting: Vec::new(),
            transitions: Vec::new(),
            dead: None,
        }
    }

    fn build(mut self) -> Dfa {
        let nfa = self.nfa;
        let width = nfa.alphabet().len();
        let start = self.intern(nfa.epsilon_closure(iter::once(nfa.start())));

        while let Some(id) = self.worklist.pop_front() {
            for (index, &symbol) in nfa.alphabet().iter().enumerate() {
                let target = {
                    let moved = nfa.step(&self.subsets[id], symbol);
                    nfa.epsilon_closure(moved)
                };
                let target = self.intern(target);
                self.transitions[id * width + index] = target;
            }
        }

        Dfa {
            alphabet: nfa.alphabet().clone(),
            start,
            accepting: self.accepting,
            transitions: self.transitions,
            dead: self.dead,
        }
    }

    // Subsets are keyed by their sorted state ids, so two equal subsets always
    // get the same DFA state. The empty subset is the dead state.
    fn intern<I>(&mut self, subset: I) -> StateId
    where
        I: IntoIterator<Item = StateId>,
    {
        let key: Vec<StateId> = subset.into_iter().collect();
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }

        let id = self.subsets.len();
        if key.is_empty() {
            trace!("dead state is {}", id);
            self.dead = Some(id);
        }

        let nfa = self.nfa;
        self.accepting
            .push(key.iter().any(|&state| nfa.is_accepting(state)));
        self.transitions
            .extend(iter::repeat(id).take(nfa.alphabet().len()));
        self.subsets.push(key.clone());
        self.ids.insert(key, id);
        self.worklist.push_back(id);
        id
    }
}
