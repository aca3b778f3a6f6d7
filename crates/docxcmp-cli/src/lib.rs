//! docxcmp CLI - Command-line interface library
//!
//! - Compare: report whether two DOCX documents match in content and style
//! - Dump: print the extracted representation of one document as JSON
//!
//! # Library Usage
//!
//! ```no_run
//! use clap::Parser;
//! use docxcmp_cli::{execute, Cli, Status};
//!
//! let cli = Cli::parse_from(["docxcmp", "compare", "a.docx", "b.docx"]);
//! let status = execute(cli, &mut std::io::stdout());
//! assert_ne!(status, Status::Failed);
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Compare two documents
//! docxcmp compare original.docx edited.docx
//!
//! # Machine-readable verdict
//! docxcmp compare original.docx edited.docx --format json
//!
//! # Inspect what is compared
//! docxcmp dump original.docx --pretty
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{compare_command, dump_command, execute, run_cli, Cli, Commands, Status};
pub use config::{LoggingSettings, OutputFormat, OutputSettings, Settings, CONFIG_FILE_NAME};
