//! States and transition rules of the `addr-spec` automaton

use std::fmt;

use crate::charset::{is_atext, is_dtext, is_escape, is_qtext};

use super::Automaton;

const DQUOTE: char = '"';
const DOT: char = '.';
const BACKSLASH: char = '\\';
const AT: char = '@';
const OPEN_BRACKET: char = '[';
const CLOSE_BRACKET: char = ']';

/// States of the DFA accepting valid email addresses.
///
/// [`State::Error`] is a trap state: once entered it is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Start state, nothing read yet
    AddrSpec,
    /// Inside an atom of a dot-atom local part
    LocalAtom,
    /// Just read a `.` in the local part
    LocalDot,
    /// Inside a quoted-string local part
    LocalQuoted,
    /// Just read a `\` inside a quoted string
    LocalEscape,
    /// Read the closing `"` of a quoted string
    LocalQuotedEnd,
    /// Read the `@` separating local part and domain
    At,
    /// Inside an atom of a dot-atom domain
    DomainAtom,
    /// Just read a `.` in the domain
    DomainDot,
    /// Inside the brackets of a domain literal
    DomainLiteralText,
    /// Read the closing `]` of a domain literal
    DomainLiteral,
    /// Trap state
    Error,
}

impl State {
    /// Whether the state lies in the local part of the address.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            State::AddrSpec
                | State::LocalAtom
                | State::LocalDot
                | State::LocalQuoted
                | State::LocalEscape
                | State::LocalQuotedEnd
        )
    }

    /// Human-readable description, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            State::AddrSpec => "address start",
            State::LocalAtom => "local part atom",
            State::LocalDot => "local part after dot",
            State::LocalQuoted => "quoted local part",
            State::LocalEscape => "quoted local part escape",
            State::LocalQuotedEnd => "end of quoted local part",
            State::At => "domain start",
            State::DomainAtom => "domain atom",
            State::DomainDot => "domain after dot",
            State::DomainLiteralText => "domain literal",
            State::DomainLiteral => "end of domain literal",
            State::Error => "error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The `addr-spec` automaton. Its start state is [`State::AddrSpec`] and
/// its accepting states are [`State::DomainAtom`] and [`State::DomainLiteral`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddrSpecDfa;

impl Automaton for AddrSpecDfa {
    type State = State;
    type Symbol = char;

    fn start() -> State {
        State::AddrSpec
    }

    fn transition(state: State, c: char) -> State {
        match state {
            State::AddrSpec => match c {
                DQUOTE => State::LocalQuoted,
                c if is_atext(c) => State::LocalAtom,
                _ => State::Error,
            },
            State::LocalAtom => match c {
                DOT => State::LocalDot,
                AT => State::At,
                c if is_atext(c) => State::LocalAtom,
                _ => State::Error,
            },
            State::LocalDot => match c {
                c if is_atext(c) => State::LocalAtom,
                _ => State::Error,
            },
            State::LocalQuoted => match c {
                BACKSLASH => State::LocalEscape,
                DQUOTE => State::LocalQuotedEnd,
                c if is_qtext(c) => State::LocalQuoted,
                _ => State::Error,
            },
            State::LocalEscape => match c {
                c if is_escape(c) => State::LocalQuoted,
                _ => State::Error,
            },
            State::LocalQuotedEnd => match c {
                AT => State::At,
                _ => State::Error,
            },
            State::At => match c {
                OPEN_BRACKET => State::DomainLiteralText,
                c if is_atext(c) => State::DomainAtom,
                _ => State::Error,
            },
            State::DomainAtom => match c {
                DOT => State::DomainDot,
                c if is_atext(c) => State::DomainAtom,
                _ => State::Error,
            },
            State::DomainDot => match c {
                c if is_atext(c) => State::DomainAtom,
                _ => State::Error,
            },
            State::DomainLiteralText => match c {
                CLOSE_BRACKET => State::DomainLiteral,
                c if is_dtext(c) => State::DomainLiteralText,
                _ => State::Error,
            },
            State::DomainLiteral | State::Error => State::Error,
        }
    }

    fn is_accepting(state: &State) -> bool {
        matches!(state, State::DomainAtom | State::DomainLiteral)
    }
}
