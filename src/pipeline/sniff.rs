//! Delimiter sniffing for delimited text files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use encoding_rs::Encoding;

use crate::pipeline::error::ConvertError;

/// Candidate delimiters, tested in order of precedence.
const CANDIDATES: [char; 4] = ['|', '\t', ';', ','];

/// Guess the column delimiter of a text file from its first line.
///
/// Reads only up to the first line break, decodes it with the requested
/// encoding, and returns the first candidate from `['|', '\t', ';', ',']`
/// found in the raw decoded line. When no candidate occurs the fallback is
/// `'\n'`, which effectively disables column splitting downstream.
///
/// This is a heuristic, not a guarantee: it looks at the raw line, so a
/// quoted header field containing a candidate character can misfire.
pub fn sniff_delimiter(path: &Path, encoding: &'static Encoding) -> Result<u8, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut raw = Vec::new();
    reader
        .read_until(b'\n', &mut raw)
        .map_err(|e| ConvertError::io(path, e))?;
    if raw.ends_with(b"\n") {
        raw.pop();
    }

    let (header, _, had_errors) = encoding.decode(&raw);
    if had_errors {
        return Err(ConvertError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }

    Ok(CANDIDATES
        .iter()
        .find(|c| header.contains(**c))
        .map(|c| *c as u8)
        .unwrap_or(b'\n'))
}
