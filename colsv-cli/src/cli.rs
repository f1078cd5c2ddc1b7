//! Command-line argument types for the `colsv` demo binary.
//!
//! This binary is intentionally small: the spec places argument parsing
//! and the caller's table object model out of scope for the core engine,
//! and this crate only needs enough of a front end to exercise
//! [`colsv_core::write_table`] end to end from a shell.

use clap::{Parser, ValueEnum};
use colsv_core::{QuoteMethod, QuoteMode};
use std::fmt;
use std::path::PathBuf;

/// Write a table to delimited text, in parallel, with a hand-rolled
/// shortest-round-trip numeric formatter.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Read whitespace-separated rows of string cells from this file
    /// instead of the built-in demo table.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output path; omitted or `-` means stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append to `output` instead of truncating it.
    #[arg(long)]
    pub append: bool,

    /// Field separator byte.
    #[arg(long, default_value = ",", value_parser = parse_byte)]
    pub field_sep: u8,

    /// Row terminator: `\n`, `\r\n`, or any other 1-2 byte sequence.
    #[arg(long, default_value = "\\n", value_parser = parse_row_sep)]
    pub row_sep: Vec<u8>,

    /// Token emitted for missing values.
    #[arg(long, default_value = "")]
    pub na: String,

    /// Decimal separator byte; must differ from `--field-sep`.
    #[arg(long, default_value = ".", value_parser = parse_byte)]
    pub decimal_sep: u8,

    /// String quoting policy.
    #[arg(long, value_enum, default_value_t = CliQuoteMode::Auto)]
    pub quote_mode: CliQuoteMode,

    /// String quoting method.
    #[arg(long, value_enum, default_value_t = CliQuoteMethod::Escape)]
    pub quote_method: CliQuoteMethod,

    /// Render booleans as `0`/`1` instead of `TRUE`/`FALSE`.
    #[arg(long)]
    pub bool_as_int: bool,

    /// Prepend a synthetic 1-based row index column.
    #[arg(long)]
    pub row_index: bool,

    /// Emit a column-name header row before the data.
    #[arg(long)]
    pub header: bool,

    /// Per-worker buffer size, in MiB (1..=1024).
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(usize).range(1..=1024))]
    pub buffer_mib: usize,

    /// Worker thread count; clamped down to the number of batches.
    #[arg(long, default_value_t = num_cpus())]
    pub threads: usize,

    /// Disable the all-double/all-integer fast paths.
    #[arg(long)]
    pub no_turbo: bool,
}

fn num_cpus() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let mut bytes = s.bytes();
    let b = bytes.next().ok_or_else(|| "expected exactly one byte".to_string())?;
    if bytes.next().is_some() {
        return Err("expected exactly one byte".to_string());
    }
    Ok(b)
}

fn parse_row_sep(s: &str) -> Result<Vec<u8>, String> {
    let unescaped = s.replace("\\r", "\r").replace("\\n", "\n");
    match unescaped.len() {
        1 | 2 => Ok(unescaped.into_bytes()),
        _ => Err("row separator must be 1 or 2 bytes (after \\r/\\n unescaping)".to_string()),
    }
}

/// Clap-facing mirror of [`QuoteMode`], following the same
/// CLI-enum-converts-via-`From`-into-the-library-enum pattern as other
/// crates in this pack's `other_examples` (readstat's `CliOutFormat`).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliQuoteMode {
    Always,
    Never,
    Auto,
}

impl From<CliQuoteMode> for QuoteMode {
    fn from(m: CliQuoteMode) -> Self {
        match m {
            CliQuoteMode::Always => QuoteMode::Always,
            CliQuoteMode::Never => QuoteMode::Never,
            CliQuoteMode::Auto => QuoteMode::Auto,
        }
    }
}

impl fmt::Display for CliQuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("always"),
            Self::Never => f.write_str("never"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliQuoteMethod {
    Escape,
    Double,
}

impl From<CliQuoteMethod> for QuoteMethod {
    fn from(m: CliQuoteMethod) -> Self {
        match m {
            CliQuoteMethod::Escape => QuoteMethod::Escape,
            CliQuoteMethod::Double => QuoteMethod::Double,
        }
    }
}

impl fmt::Display for CliQuoteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => f.write_str("escape"),
            Self::Double => f.write_str("double"),
        }
    }
}
