//! Conversion request: the explicit configuration value consumed by the
//! pipeline, built once from the CLI and discarded after the run.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::pipeline::error::ConvertError;

/// Quoting policy for delimited-text fields, mirrored onto
/// [`csv::QuoteStyle`] on the write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    /// Quote only fields that need it (delimiter, quote, or line break).
    Minimal,
    /// Quote every field.
    All,
    /// Quote every non-numeric field.
    NonNumeric,
    /// Never quote; the quote character is treated as absent.
    None,
}

impl QuoteMode {
    /// Map the CLI integer flag {0,1,2,3} to a quoting mode.
    pub fn from_flag(flag: u8) -> Option<QuoteMode> {
        match flag {
            0 => Some(QuoteMode::Minimal),
            1 => Some(QuoteMode::All),
            2 => Some(QuoteMode::NonNumeric),
            3 => Some(QuoteMode::None),
            _ => None,
        }
    }

    /// The equivalent writer-side quote style.
    pub fn style(self) -> csv::QuoteStyle {
        match self {
            QuoteMode::Minimal => csv::QuoteStyle::Necessary,
            QuoteMode::All => csv::QuoteStyle::Always,
            QuoteMode::NonNumeric => csv::QuoteStyle::NonNumeric,
            QuoteMode::None => csv::QuoteStyle::Never,
        }
    }
}

/// Where the input rows come from, resolved once into an ordered file list
/// before conversion begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single existing file.
    SingleFile(PathBuf),
    /// Every plain file in a directory, sorted lexicographically by name.
    Directory(PathBuf),
    /// An explicit ordered list of files (multiple positional arguments).
    ExplicitFiles(Vec<PathBuf>),
}

impl InputSource {
    /// Classify the positional CLI paths. A single path must be an existing
    /// file or directory; every member of a multi-path invocation must be
    /// an existing file.
    pub fn from_paths(paths: &[PathBuf]) -> Result<InputSource, ConvertError> {
        match paths {
            [] => Err(ConvertError::InvalidInput(PathBuf::new())),
            [single] => {
                if single.is_dir() {
                    Ok(InputSource::Directory(single.clone()))
                } else if single.is_file() {
                    Ok(InputSource::SingleFile(single.clone()))
                } else {
                    Err(ConvertError::InvalidInput(single.clone()))
                }
            }
            many => {
                for path in many {
                    if !path.is_file() {
                        return Err(ConvertError::InvalidInput(path.clone()));
                    }
                }
                Ok(InputSource::ExplicitFiles(many.to_vec()))
            }
        }
    }

    /// The first raw path, used by the dispatcher for extension routing.
    pub fn first_path(&self) -> &Path {
        match self {
            InputSource::SingleFile(p) | InputSource::Directory(p) => p,
            InputSource::ExplicitFiles(files) => &files[0],
        }
    }

    /// Resolve into the ordered list of input files.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, ConvertError> {
        match self {
            InputSource::SingleFile(path) => Ok(vec![path.clone()]),
            InputSource::ExplicitFiles(files) => Ok(files.clone()),
            InputSource::Directory(dir) => {
                let entries =
                    fs::read_dir(dir).map_err(|e| ConvertError::io(dir.clone(), e))?;
                let mut files = Vec::new();
                for entry in entries {
                    let entry = entry.map_err(|e| ConvertError::io(dir.clone(), e))?;
                    let path = entry.path();
                    if path.is_file() {
                        files.push(path);
                    }
                }
                files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
                Ok(files)
            }
        }
    }

    /// Base name used to derive a default workbook file name: the file stem
    /// for a single file, the directory name for a directory, and the first
    /// file's stem for an explicit list.
    pub fn default_stem(&self) -> String {
        let path = self.first_path();
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
            .to_string()
    }
}

/// The full configuration for one conversion, consumed once by the pipeline.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Input rows.
    pub source: InputSource,
    /// Output file (CSV -> workbook) or directory (workbook -> CSV);
    /// derived from the input when absent.
    pub output: Option<PathBuf>,
    /// Column delimiter; `None` triggers per-file sniffing on the
    /// CSV -> workbook path and falls back to comma when writing CSV.
    pub delimiter: Option<u8>,
    /// Text encoding for reading and writing delimited files.
    pub encoding: &'static Encoding,
    /// Escape character honored when parsing delimited text; not applied
    /// when writing (asymmetry kept from the original tool).
    pub escape: Option<u8>,
    /// Quote character. Always `None` when `quoting` is [`QuoteMode::None`].
    pub quote: Option<u8>,
    /// Field quoting policy.
    pub quoting: QuoteMode,
}

impl ConvertRequest {
    /// Build a request, enforcing the invariant that [`QuoteMode::None`]
    /// forces the quote character to be absent.
    pub fn new(
        source: InputSource,
        output: Option<PathBuf>,
        delimiter: Option<u8>,
        encoding: &'static Encoding,
        escape: Option<u8>,
        quote: Option<u8>,
        quoting: QuoteMode,
    ) -> ConvertRequest {
        let quote = if quoting == QuoteMode::None { None } else { quote };
        ConvertRequest {
            source,
            output,
            delimiter,
            encoding,
            escape,
            quote,
            quoting,
        }
    }
}
