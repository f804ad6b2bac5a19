// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Nondeterministic finite automata built by Thompson's construction.
//!
//! The states of an `Nfa` live in an arena (a `Vec`) and are referred to by
//! index. Every node of a `Pattern` tree is compiled into a fragment with a
//! single entry state and a single exit state, and fragments are composed
//! only by adding epsilon transitions between them. No fragment is ever
//! shared, so compiling a sub-tree twice (as counted repetition does) always
//! allocates fresh states.

use std::collections::BTreeSet;
use std::iter;

use alphabet::Alphabet;
use pattern::Pattern;

/// The identifier of a state in an `Nfa` or a `Dfa`.
pub type StateId = usize;

#[derive(Debug, Clone, Default)]
struct State {
    symbols: Vec<(char, StateId)>,
    epsilons: Vec<StateId>,
}

/// A nondeterministic finite automaton with epsilon transitions.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    accept: StateId,
    alphabet: Alphabet,
}

impl Nfa {
    /// Compile `pattern` into an `Nfa` using Thompson's construction.
    ///
    /// The resulting automaton has one accepting state and a number of states
    /// and transitions linear in the size of the pattern tree (with counted
    /// repetition expanded into copies).
    pub fn new(pattern: &Pattern) -> Nfa {
        let mut builder = Builder { states: Vec::new() };
        let fragment = builder.fragment(pattern);

        let nfa = Nfa {
            states: builder.states,
            start: fragment.entry,
            accept: fragment.exit,
            alphabet: pattern.alphabet(),
        };
        debug!(
            "nfa for \"{}\" has {} states and {} transitions",
            pattern,
            nfa.state_count(),
            nfa.transition_count()
        );
        nfa
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The accepting state.
    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Predicate for the accepting state.
    pub fn is_accepting(&self, state: StateId) -> bool {
        state == self.accept
    }

    /// The alphabet of the pattern the automaton was built from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The number of transitions, counting both symbol and epsilon transitions.
    pub fn transition_count(&self) -> usize {
        self.states
            .iter()
            .map(|state| state.symbols.len() + state.epsilons.len())
            .sum()
    }

    /// The set of states reachable from `states` using only epsilon transitions.
    ///
    /// The result includes `states` themselves.
    pub fn epsilon_closure<I>(&self, states: I) -> BTreeSet<StateId>
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closure = BTreeSet::new();
        let mut stack: Vec<StateId> = states.into_iter().collect();

        while let Some(state) = stack.pop() {
            if closure.insert(state) {
                stack.extend(
                    self.states[state]
                        .epsilons
                        .iter()
                        .cloned()
                        .filter(|next| !closure.contains(next)),
                );
            }
        }
        closure
    }

    /// The set of states reachable from `states` by exactly one transition on
    /// `symbol`. The result is not epsilon closed.
    pub fn step<'a, I>(&self, states: I, symbol: char) -> BTreeSet<StateId>
    where
        I: IntoIterator<Item = &'a StateId>,
    {
        states
            .into_iter()
            .flat_map(|&state| self.states[state].symbols.iter())
            .filter(|&&(c, _)| c == symbol)
            .map(|&(_, next)| next)
            .collect()
    }

    /// Decide membership of `word` by simulating the automaton directly.
    ///
    /// This tracks the set of current states and is mostly useful for checking
    /// a `Dfa` built from this `Nfa`.
    pub fn is_match(&self, word: &str) -> bool {
        let mut current = self.epsilon_closure(iter::once(self.start));
        for c in word.chars() {
            if current.is_empty() {
                return false;
            }
            current = self.epsilon_closure(self.step(&current, c));
        }
        current.contains(&self.accept)
    }
}

#[derive(Debug, Clone, Copy)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

struct Builder {
    states: Vec<State>,
}

impl Builder {
    fn state(&mut self) -> StateId {
        self.states.push(State::default());
        self.states.len() - 1
    }

    fn symbol(&mut self, from: StateId, c: char, to: StateId) {
        self.states[from].symbols.push((c, to));
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from].epsilons.push(to);
    }

    fn fragment(&mut self, pattern: &Pattern) -> Fragment {
        use pattern::Pattern::*;

        match *pattern {
            Literal(c) => {
                let entry = self.state();
                let exit = self.state();
                self.symbol(entry, c, exit);
                Fragment { entry, exit }
            }
            Class(ref class) => {
                let entry = self.state();
                let exit = self.state();
                for c in class.iter() {
                    self.symbol(entry, c, exit);
                }
                Fragment { entry, exit }
            }
            Concat(ref first, ref second) => {
                let first = self.fragment(first);
                let second = self.fragment(second);
                self.epsilon(first.exit, second.entry);
                Fragment {
                    entry: first.entry,
                    exit: second.exit,
                }
            }
            Union(ref first, ref second) => {
                let entry = self.state();
                let first = self.fragment(first);
                let second = self.fragment(second);
                let exit = self.state();
                self.epsilon(entry, first.entry);
                self.epsilon(entry, second.entry);
                self.epsilon(first.exit, exit);
                self.epsilon(second.exit, exit);
                Fragment { entry, exit }
            }
            Star(ref inner) => self.star(inner),
            Plus(ref inner) => {
                let body = self.fragment(inner);
                let exit = self.state();
                self.epsilon(body.exit, body.entry);
                self.epsilon(body.exit, exit);
                Fragment {
                    entry: body.entry,
                    exit,
                }
            }
            Optional(ref inner) => self.optional(inner),
            Repeat(ref inner, min, max) => self.repeat(inner, min, max),
        }
    }

    fn star(&mut self, inner: &Pattern) -> Fragment {
        let entry = self.state();
        let body = self.fragment(inner);
        let exit = self.state();
        self.epsilon(entry, body.entry);
        self.epsilon(entry, exit);
        self.epsilon(body.exit, body.entry);
        self.epsilon(body.exit, exit);
        Fragment { entry, exit }
    }

    fn optional(&mut self, inner: &Pattern) -> Fragment {
        let entry = self.state();
        let body = self.fragment(inner);
        let exit = self.state();
        self.epsilon(entry, body.entry);
        self.epsilon(entry, exit);
        self.epsilon(body.exit, exit);
        Fragment { entry, exit }
    }

    // `min` mandatory copies followed by either one starred copy or
    // `max - min` individually optional copies.
    fn repeat(&mut self, inner: &Pattern, min: u32, max: Option<u32>) -> Fragment {
        let mut pieces: Vec<Fragment> = (0..min).map(|_| self.fragment(inner)).collect();
        match max {
            None => pieces.push(self.star(inner)),
            Some(max) => {
                for _ in min..max {
                    let piece = self.optional(inner);
                    pieces.push(piece);
                }
            }
        }
        self.chain(pieces)
    }

    fn chain(&mut self, pieces: Vec<Fragment>) -> Fragment {
        let mut pieces = pieces.into_iter();
        let first = match pieces.next() {
            Some(first) => first,
            None => return self.empty(),
        };

        pieces.fold(first, |chained, next| {
            self.epsilon(chained.exit, next.entry);
            Fragment {
                entry: chained.entry,
                exit: next.exit,
            }
        })
    }

    // Matches only the empty word; the result of `{0}` and `{0,0}`.
    fn empty(&mut self) -> Fragment {
        let entry = self.state();
        let exit = self.state();
        self.epsilon(entry, exit);
        Fragment { entry, exit }
    }
}
