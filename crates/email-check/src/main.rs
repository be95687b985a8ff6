//! email-check - validate email addresses from the command line

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use email_check::{addresses_from_lines, check, render, OutputFormat};

#[derive(Parser)]
#[command(name = "email-check")]
#[command(about = "Validate RFC 5322 addr-spec email addresses")]
#[command(version)]
struct Cli {
    /// Addresses to check; read one per line from stdin when omitted
    addresses: Vec<String>,

    /// Print nothing, report through the exit code only (overrides --json)
    #[arg(short, long)]
    quiet: bool,

    /// Print one JSON object per address
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every address was valid.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let stdin_text;
    let inputs: Vec<&str> = if cli.addresses.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read addresses from stdin")?;
        stdin_text = buf;
        addresses_from_lines(&stdin_text).collect()
    } else {
        cli.addresses.iter().map(String::as_str).collect()
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut all_valid = true;
    for input in inputs {
        let report = check(input);
        tracing::debug!(input, valid = report.valid, "checked address");
        all_valid &= report.valid;
        if !cli.quiet {
            println!("{}", render(&report, format)?);
        }
    }
    Ok(all_valid)
}
