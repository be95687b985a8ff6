//! Finite state machine driving the parser
//!
//! The [`Automaton`] trait abstracts a deterministic finite automaton: a
//! set of states, a start state, a transition function over input symbols
//! and a set of accepting states. An input belongs to the language when it
//! is fully consumed and the automaton sits in an accepting state.
//!
//! [`Machine`] runs [`AddrSpecDfa`] over a string. It can be iterated step by
//! step, or driven to completion with [`Machine::run`], which records where
//! the local part ends and where the input went wrong.

mod state;

pub use state::{AddrSpecDfa, State};

use std::str::CharIndices;

use crate::error::{ParseError, Result};

/// A deterministic finite automaton.
pub trait Automaton {
    /// State set
    type State: Copy;
    /// Input alphabet
    type Symbol;

    /// The start state.
    fn start() -> Self::State;

    /// Next state after consuming `symbol` in `state`.
    fn transition(state: Self::State, symbol: Self::Symbol) -> Self::State;

    /// Whether `state` accepts the input consumed so far.
    fn is_accepting(state: &Self::State) -> bool;
}

/// One transition taken by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Byte offset of the consumed character
    pub position: usize,
    /// Consumed character
    pub ch: char,
    /// State after the transition
    pub state: State,
}

/// Summary of a complete run over an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    /// Final state, `None` when the input was empty
    pub last: Option<State>,
    /// Byte offset of the `@` separating local part and domain
    pub separator: Option<usize>,
    /// First transition into [`State::Error`], with the state before it
    pub failure: Option<(Step, State)>,
}

impl Trace {
    /// Whether the input was accepted.
    pub fn is_accepted(&self) -> bool {
        self.last.as_ref().is_some_and(AddrSpecDfa::is_accepting)
    }

    /// Turn the trace into the separator offset, or the reason for rejection.
    pub fn into_result(self) -> Result<usize> {
        let last = self.last.ok_or(ParseError::Empty)?;
        if let Some((step, state)) = self.failure {
            return Err(ParseError::UnexpectedChar {
                ch: step.ch,
                position: step.position,
                state,
            });
        }
        if !AddrSpecDfa::is_accepting(&last) {
            return Err(ParseError::Incomplete { state: last });
        }
        // Every path into an accepting state passes through `State::At`.
        self.separator.ok_or(ParseError::Incomplete { state: last })
    }
}

/// The parser's state machine over a borrowed input.
#[derive(Debug, Clone, Copy)]
pub struct Machine<'a> {
    input: &'a str,
}

impl<'a> Machine<'a> {
    /// Create a machine for `input`.
    pub fn new(input: &'a str) -> Self {
        Machine { input }
    }

    /// Consume the whole input and summarize the run.
    ///
    /// Stops at the first transition into [`State::Error`], since the trap
    /// state cannot be left.
    pub fn run(self) -> Trace {
        let mut trace = Trace {
            last: None,
            separator: None,
            failure: None,
        };
        let mut previous = AddrSpecDfa::start();
        for step in self {
            trace.last = Some(step.state);
            match step.state {
                State::At if previous.is_local() => trace.separator = Some(step.position),
                State::Error => {
                    trace.failure = Some((step, previous));
                    break;
                }
                _ => {}
            }
            previous = step.state;
        }
        trace
    }
}

impl<'a> IntoIterator for Machine<'a> {
    type Item = Step;
    type IntoIter = MachineIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        MachineIter {
            input: self.input.char_indices(),
            state: AddrSpecDfa::start(),
        }
    }
}

/// Iterator performing one transition per input character.
///
/// Exhausted when the input is. Once the machine is in [`State::Error`]
/// every remaining character keeps it there.
#[derive(Debug, Clone)]
pub struct MachineIter<'a> {
    input: CharIndices<'a>,
    state: State,
}

impl MachineIter<'_> {
    /// Current state of the machine.
    pub fn state(&self) -> State {
        self.state
    }
}

impl Iterator for MachineIter<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let (position, ch) = self.input.next()?;
        self.state = AddrSpecDfa::transition(self.state, ch);
        Some(Step {
            position,
            ch,
            state: self.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_steps() {
        assert_eq!(Machine::new("").into_iter().count(), 0);
        assert_eq!(Machine::new("").run().last, None);
    }

    #[test]
    fn test_iterator_stays_in_error() {
        let states: Vec<State> = Machine::new("a b@c").into_iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                State::LocalAtom,
                State::Error,
                State::Error,
                State::Error,
                State::Error
            ]
        );
    }

    #[test]
    fn test_run_records_separator() {
        let trace = Machine::new("\"a@b\"@[x@y]").run();
        assert!(trace.is_accepted());
        assert_eq!(trace.separator, Some(5));
    }

    #[test]
    fn test_run_records_first_failure() {
        let trace = Machine::new("ab..c@d").run();
        let (step, before) = trace.failure.unwrap();
        assert_eq!(step.position, 3);
        assert_eq!(step.ch, '.');
        assert_eq!(before, State::LocalDot);
    }

    #[test]
    fn test_into_result_incomplete() {
        assert_eq!(
            Machine::new("a@b.").run().into_result(),
            Err(ParseError::Incomplete {
                state: State::DomainDot
            })
        );
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let trace = Machine::new("é@x").run();
        let (step, _) = trace.failure.unwrap();
        assert_eq!(step.position, 0);
        let trace = Machine::new("a@xé").run();
        let (step, _) = trace.failure.unwrap();
        assert_eq!(step.position, 3);
    }
}
