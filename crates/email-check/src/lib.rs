//! Validation reports for the `email-check` command line tool.

#![warn(missing_docs)]

use serde::Serialize;

use email_parser::Email;

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `valid: ...` / `invalid: ...: reason`
    Text,
    /// One JSON object per line
    Json,
}

/// Outcome of checking a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Address as given
    pub input: String,
    /// Whether the address parsed
    pub valid: bool,
    /// Local part, when valid
    pub local: Option<String>,
    /// Domain, when valid
    pub domain: Option<String>,
    /// Parse error message, when invalid
    pub error: Option<String>,
    /// Byte offset of the offending character, when known
    pub position: Option<usize>,
}

/// Check one address.
pub fn check(input: &str) -> Report {
    match Email::parse(input) {
        Ok(email) => {
            let (local, domain) = email.into_parts();
            Report {
                input: input.to_owned(),
                valid: true,
                local: Some(local),
                domain: Some(domain),
                error: None,
                position: None,
            }
        }
        Err(e) => Report {
            input: input.to_owned(),
            valid: false,
            local: None,
            domain: None,
            error: Some(e.to_string()),
            position: e.position(),
        },
    }
}

/// Render a report as a single line.
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(report)?,
        OutputFormat::Text if report.valid => format!("valid: {}", report.input),
        OutputFormat::Text => format!(
            "invalid: {}: {}",
            report.input,
            report.error.as_deref().unwrap_or_default()
        ),
    })
}

/// Non-blank lines of `text`, trimmed of surrounding line endings.
pub fn addresses_from_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}
