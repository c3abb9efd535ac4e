//! CSV -> workbook conversion: one sheet per input file.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::pipeline::encoding;
use crate::pipeline::error::ConvertError;
use crate::pipeline::request::ConvertRequest;
use crate::pipeline::sniff::sniff_delimiter;

/// Convert the request's delimited input files into a single workbook with
/// one sheet per file, named after the file's stem. Returns the path of the
/// workbook written.
///
/// The output path must not exist; the check runs before anything is read.
/// The workbook is buffered in memory and persisted by one final save, so a
/// failure while reading a later input leaves no partial file on disk.
pub fn csv_to_workbook(request: &ConvertRequest) -> Result<PathBuf, ConvertError> {
    let files = request.source.resolve()?;

    let output = match &request.output {
        Some(path) => path.clone(),
        None => PathBuf::from(format!("{}.xlsx", request.source.default_stem())),
    };
    if output.exists() {
        return Err(ConvertError::OutputExists(output));
    }

    let mut workbook = Workbook::new();
    for path in &files {
        append_sheet(&mut workbook, path, request)?;
    }
    workbook.save(&output)?;

    Ok(output)
}

/// Parse one delimited file and write it as a new sheet. Row 0 of the sheet
/// is the file's first parsed row; headers get no special treatment.
fn append_sheet(
    workbook: &mut Workbook,
    path: &Path,
    request: &ConvertRequest,
) -> Result<(), ConvertError> {
    let sheet_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet")
        .to_string();

    let delimiter = match request.delimiter {
        Some(d) => d,
        None => sniff_delimiter(path, request.encoding)?,
    };

    let text = encoding::read_to_string(path, request.encoding)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .escape(request.escape)
        .quoting(request.quote.is_some())
        .quote(request.quote.unwrap_or(b'"'))
        .from_reader(text.as_bytes());

    let worksheet = workbook.add_worksheet().set_name(sheet_name)?;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        for (col, field) in record.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
            worksheet.write_string(row as u32, col, field)?;
        }
    }

    Ok(())
}
