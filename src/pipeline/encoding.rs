//! Text encoding support for delimited files.
//!
//! The CSV layer works on UTF-8 in memory; files in any other encoding are
//! decoded on read and encoded on write with encoding_rs, accepting any
//! WHATWG encoding label ("utf-8", "latin1", "windows-1252", ...).

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::pipeline::error::ConvertError;

/// Resolve an encoding label, e.g. from the `-e/--encoding` flag.
pub fn resolve(label: &str) -> Result<&'static Encoding, ConvertError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))
}

/// Read a whole file and decode it. Malformed byte sequences are an error,
/// not replaced: decode failures propagate and end the run.
pub fn read_to_string(path: &Path, encoding: &'static Encoding) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(ConvertError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

/// Write UTF-8 text to a file in the requested encoding. Text that the
/// encoding cannot represent is an error, not replaced: encode failures
/// propagate and end the run.
pub fn write_text(
    path: &Path,
    text: &str,
    encoding: &'static Encoding,
) -> Result<(), ConvertError> {
    if encoding == UTF_8 {
        return fs::write(path, text.as_bytes()).map_err(|e| ConvertError::io(path, e));
    }
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(ConvertError::Encode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    fs::write(path, &bytes).map_err(|e| ConvertError::io(path, e))
}
