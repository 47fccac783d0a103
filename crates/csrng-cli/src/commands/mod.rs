pub mod draw;
pub mod seq;

use std::fmt::Display;

use csrng_core::{EntropySource, OsSource, ReaderSource};
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Parse a format string into the enum.
pub fn parse_format(s: &str) -> Format {
    match s {
        "text" => Format::Text,
        "json" => Format::Json,
        _ => {
            eprintln!("Unknown format '{s}', using text");
            Format::Text
        }
    }
}

/// Build the entropy source: the OS generator, or a file/device when a path
/// is given. Exits the process if the path cannot be opened.
pub fn make_source(path: Option<&str>) -> Box<dyn EntropySource> {
    match path {
        None => Box::new(OsSource),
        Some(path) => match ReaderSource::open(path) {
            Ok(src) => {
                log::info!("reading entropy from {path}");
                Box::new(src)
            }
            Err(e) => {
                eprintln!("Error: cannot open entropy source {path}: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Error type shared by the command runners.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// JSON document printed by every command with `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<T> {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<u64>,
    pub values: Vec<T>,
}

/// Independent draws: one value per line in text mode.
pub fn render_draws<T: Display + Serialize>(
    report: &Report<T>,
    format: Format,
) -> serde_json::Result<String> {
    render(report, format, "\n")
}

/// A single sequence: space-separated on one line in text mode.
pub fn render_sequence<T: Display + Serialize>(
    report: &Report<T>,
    format: Format,
) -> serde_json::Result<String> {
    render(report, format, " ")
}

fn render<T: Display + Serialize>(
    report: &Report<T>,
    format: Format,
    sep: &str,
) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(report
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(sep)),
        Format::Json => serde_json::to_string(report),
    }
}
