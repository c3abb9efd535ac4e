//! Command-line argument definitions using clap

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::pipeline::{encoding, ConvertRequest, InputSource, QuoteMode};

/// csvxl - Convert tabular files between CSV and XLS/XLSX
///
/// Direction is inferred from the input extension: `.xls`/`.xlsx` inputs
/// become one CSV file per sheet; anything else is read as delimited text
/// and written as one workbook sheet per input file.
#[derive(Parser, Debug)]
#[command(name = "csvxl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file or folder name (one or multiple)
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    /// Output file (CSV -> XLSX) or folder (XLSX -> CSV) name.
    /// Defaults to the input's base name with '.xlsx', or to the
    /// current directory for the XLSX -> CSV direction.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Column field delimiter (default: comma). Pass an empty value to
    /// sniff the delimiter from each input file's first line.
    #[arg(short, long, default_value = ",", value_parser = validate_optional_char)]
    pub delimiter: String,

    /// File encoding for delimited text
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Escape character for delimited-text parsing. Pass an empty value
    /// to disable escaping.
    #[arg(short = 'E', long, default_value = "\\", value_parser = validate_optional_char)]
    pub escapechar: String,

    /// Text quoting {0: minimal, 1: all, 2: non-numeric, 3: none}
    #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub quoting: u8,

    /// Quote character
    #[arg(short = 'Q', long, default_value = "\"", value_parser = validate_char)]
    pub quotechar: String,
}

impl Cli {
    /// Resolve the parsed arguments into a validated conversion request.
    ///
    /// Classifies the positional paths (failing on nonexistent input),
    /// resolves the encoding label, and applies the quoting invariant:
    /// mode 3 (none) discards the quote character.
    pub fn to_request(&self) -> Result<ConvertRequest> {
        let source = InputSource::from_paths(&self.input)?;
        let enc = encoding::resolve(&self.encoding)?;
        let quoting = QuoteMode::from_flag(self.quoting)
            .ok_or_else(|| anyhow::anyhow!("quoting must be one of 0, 1, 2, 3"))?;

        Ok(ConvertRequest::new(
            source,
            self.output.clone(),
            first_byte(&self.delimiter),
            enc,
            first_byte(&self.escapechar),
            first_byte(&self.quotechar),
            quoting,
        ))
    }
}

/// Single ASCII byte of a one-character flag value, `None` when empty.
fn first_byte(s: &str) -> Option<u8> {
    s.bytes().next()
}

/// Validator for single-character flags
fn validate_char(s: &str) -> Result<String, String> {
    if s.len() == 1 && s.is_ascii() {
        Ok(s.to_string())
    } else {
        Err(format!("'{}' must be a single ASCII character", s))
    }
}

/// Validator for single-character flags that also accept an empty value
fn validate_optional_char(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Ok(String::new())
    } else {
        validate_char(s)
    }
}
