//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use docxcmp_core::{compare, extract_content, DocumentSource};

use crate::config::{LoggingSettings, OutputFormat, Settings};

#[derive(Debug, Parser)]
#[command(name = "docxcmp")]
#[command(author, version, about = "Compare DOCX documents for content and style", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./docxcmp.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two DOCX documents
    Compare {
        /// First DOCX file
        docx1: PathBuf,

        /// Second DOCX file
        docx2: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the extracted representation of a DOCX file as JSON
    Dump {
        /// Input DOCX file
        input: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// Process outcome, mapped onto the exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Documents are identical, or the command succeeded
    Success,
    /// Documents differ
    Different,
    /// Nothing could be decided: unreadable input, bad config
    Failed,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Different => 1,
            Status::Failed => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and writes results to stdout.
pub fn run_cli() -> ExitCode {
    let cli = Cli::parse();
    let stdout = io::stdout();
    execute(cli, &mut stdout.lock()).into()
}

/// Execute parsed arguments, writing command output to `out`.
///
/// Errors are reported in the requested format: a JSON `{"error": ...}`
/// object on `out`, or an `Error:` line on stderr.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Status {
    let requested = match &cli.command {
        Commands::Compare { format, .. } => *format,
        Commands::Dump { .. } => None,
    };

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            report_error(out, requested.unwrap_or_default(), &err);
            return Status::Failed;
        }
    };
    let format = requested.unwrap_or(settings.output.format);

    if let Err(err) = init_logging(&settings.logging) {
        report_error(out, format, &err);
        return Status::Failed;
    }

    let result = match cli.command {
        Commands::Compare {
            docx1,
            docx2,
            pretty,
            ..
        } => compare_command(&docx1, &docx2, format, pretty || settings.output.pretty, out),
        Commands::Dump { input, pretty } => {
            dump_command(&input, pretty || settings.output.pretty, out).map(|()| Status::Success)
        }
    };

    result.unwrap_or_else(|err| {
        report_error(out, format, &err);
        Status::Failed
    })
}

/// Execute the compare command
pub fn compare_command<W: Write>(
    docx1: &Path,
    docx2: &Path,
    format: OutputFormat,
    pretty: bool,
    out: &mut W,
) -> Result<Status> {
    let comparison = compare(docx1, docx2)?;

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", to_json(&comparison, pretty)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Identical: {}", comparison.identical)?;
            writeln!(out, "Message: {}", comparison.message)?;
        }
    }

    Ok(if comparison.identical {
        Status::Success
    } else {
        Status::Different
    })
}

/// Execute the dump command
pub fn dump_command<W: Write>(input: &Path, pretty: bool, out: &mut W) -> Result<()> {
    let representation = extract_content(&DocumentSource::from(input))?;
    debug!(
        input = %input.display(),
        nodes = representation.len(),
        "dumping representation"
    );
    writeln!(out, "{}", to_json(&representation, pretty)?)?;
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output to JSON")
}

/// Install the stderr subscriber. `RUST_LOG` overrides the configured filter.
fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), &settings.filter)?;

    // Already installed when running more than once in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    Ok(())
}

fn build_filter(env_directives: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(directives) = env_directives.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(configured)
        .with_context(|| format!("Invalid logging filter: {}", configured))
}

fn report_error<W: Write>(out: &mut W, format: OutputFormat, err: &anyhow::Error) {
    let message = error_message(err);
    if format == OutputFormat::Json {
        let report = ErrorReport { error: &message };
        if let Ok(json) = serde_json::to_string(&report) {
            if writeln!(out, "{}", json).is_ok() {
                return;
            }
        }
    }
    eprintln!("Error: {}", message);
}

/// Join an error chain, skipping causes their parent already spells out
fn error_message(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if message.ends_with(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}
