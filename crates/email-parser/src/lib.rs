//! # email-parser
//!
//! Parser for email addresses (`addr-spec`) as defined in Section 3.4.1 of
//! [RFC 5322].
//!
//! Only a subset of the grammar is implemented: folding white space,
//! comments and the obsolete (`obs-*`) productions are not supported.
//!
//! ## Grammar
//!
//! ```text
//! addr-spec        =  local-part "@" domain
//! local-part       =  dot-atom / quoted-string
//! domain           =  dot-atom / domain-literal
//! domain-literal   =  "[" *DTEXT "]"
//! dot-atom         =  atom *("." atom)
//! atom             =  1*ATEXT
//! quoted-string    =  DQUOTE *(QTEXT / "\" ESCAPE) DQUOTE
//!
//! ATEXT            =  ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "'" /
//!                     "*" / "+" / "-" / "/" / "=" / "?" / "^" / "_" /
//!                     "`" / "{" / "|" / "}" / "~"
//! DTEXT            =  %d33-90 / %d94-126
//! QTEXT            =  %d33 / %d35-91 / %d93-126
//! ESCAPE           =  VCHAR / WSP
//! ```
//!
//! ## Architecture
//!
//! The grammar above describes a regular language, so there is no lexer
//! and no parser. A deterministic finite automaton ([`fsm`]) walks the
//! input one character at a time:
//!
//! ```text
//! &str → [Machine] → Trace → [Email] / ParseError
//! ```
//!
//! ```
//! use email_parser::Email;
//!
//! let email: Email = "someone@example.com".parse().unwrap();
//! assert_eq!(email.local_part(), "someone");
//! assert_eq!(email.domain(), "example.com");
//! ```
//!
//! [RFC 5322]: https://datatracker.ietf.org/doc/html/rfc5322#section-3.4.1

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod charset;
pub mod email;
pub mod error;
pub mod fsm;

// Re-export main types
pub use email::{validate, Email};
pub use error::{ParseError, Result};
pub use fsm::{AddrSpecDfa, Automaton, Machine, State, Step, Trace};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
