//! Error types for the conversion pipeline.
//!
//! Every variant is terminal: the pipeline never retries, and the binary
//! surfaces the message as a one-line diagnostic on stderr before exiting
//! nonzero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting between CSV and workbook formats.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path is neither an existing file nor an existing directory.
    #[error("'{}' is neither a file nor a directory", .0.display())]
    InvalidInput(PathBuf),

    /// The computed output path already exists. The tool never overwrites
    /// files and never reuses a pre-existing output directory (other than
    /// the current-directory default).
    #[error("output '{}' already exists", .0.display())]
    OutputExists(PathBuf),

    /// The encoding label was not recognized by encoding_rs.
    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    /// The file's bytes are not valid for the requested encoding.
    #[error("'{}' is not valid {encoding}", .path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The output text cannot be represented in the requested encoding.
    #[error("'{}' cannot be encoded as {encoding}", .path.display())]
    Encode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// A filesystem operation failed, tagged with the path involved.
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed delimited-text input.
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook could not be opened or a sheet could not be read.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The output workbook could not be built or saved.
    #[error("workbook write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl ConvertError {
    /// Tag an `io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
