//! The validated email address type

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::fsm::Machine;

/// An email address that has passed `addr-spec` validation.
///
/// The only way to obtain one is by parsing, so holding an `Email` means
/// holding a valid address. Both parts keep the exact input text, quotes
/// and brackets included. Equality is byte-wise since local parts are
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    local: String,
    domain: String,
}

impl Email {
    /// Parse `input` as an `addr-spec`.
    pub fn parse(input: &str) -> Result<Self> {
        let at = Machine::new(input).run().into_result().inspect_err(|e| {
            tracing::debug!(input, error = %e, "rejected email address");
        })?;
        Ok(Self {
            local: input[..at].to_owned(),
            domain: input[at + 1..].to_owned(),
        })
    }

    /// The local part, as written (a quoted string keeps its quotes).
    pub fn local_part(&self) -> &str {
        &self.local
    }

    /// The domain, as written (a domain literal keeps its brackets).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether the local part is a quoted string.
    pub fn is_quoted(&self) -> bool {
        self.local.starts_with('"')
    }

    /// Whether the domain is a bracketed domain literal.
    pub fn is_domain_literal(&self) -> bool {
        self.domain.starts_with('[')
    }

    /// Split into `(local, domain)`.
    pub fn into_parts(self) -> (String, String) {
        (self.local, self.domain)
    }
}

/// Whether `input` is a valid `addr-spec`.
pub fn validate(input: &str) -> bool {
    Machine::new(input).run().is_accepted()
}

impl FromStr for Email {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Email::parse(s)
    }
}

impl TryFrom<&str> for Email {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Email::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self> {
        Email::parse(&s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Email {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Email {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Email::parse(&s).map_err(serde::de::Error::custom)
    }
}
