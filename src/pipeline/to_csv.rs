//! Workbook -> CSV conversion: one delimited file per sheet.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader};

use crate::pipeline::cell::CellValue;
use crate::pipeline::encoding;
use crate::pipeline::error::ConvertError;
use crate::pipeline::request::ConvertRequest;

/// Validate and create the request's output directory, once per invocation.
///
/// The directory defaults to the current directory. A missing directory is
/// created; an existing one other than the default is refused rather than
/// silently reused.
pub fn prepare_output_dir(request: &ConvertRequest) -> Result<PathBuf, ConvertError> {
    let out_dir = request
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    if !out_dir.exists() {
        fs::create_dir(&out_dir).map_err(|e| ConvertError::io(out_dir.clone(), e))?;
    } else if out_dir != Path::new(".") {
        return Err(ConvertError::OutputExists(out_dir));
    }
    Ok(out_dir)
}

/// Convert one workbook file into one CSV file per sheet, written to the
/// request's output directory as `{dir}/{workbookStem}_{sheetName}.csv`.
/// Returns the produced paths in sheet order.
pub fn workbook_to_csv(
    request: &ConvertRequest,
    input: &Path,
) -> Result<Vec<PathBuf>, ConvertError> {
    let out_dir = prepare_output_dir(request)?;
    sheets_to_csv(request, input, &out_dir)
}

/// Write each sheet of `input` into an already-prepared output directory.
pub fn sheets_to_csv(
    request: &ConvertRequest,
    input: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ConvertError> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string();

    let mut workbook = open_workbook_auto(input)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut outputs = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = workbook.worksheet_range(sheet_name)?;
        let out_path = out_dir.join(format!("{}_{}.csv", stem, sheet_name));
        write_sheet(&out_path, range.rows(), request)?;
        outputs.push(out_path);
    }

    Ok(outputs)
}

/// Write one sheet's rows, every row verbatim including row 0. Only the
/// delimiter, quote character, and quoting mode apply here; the escape
/// character is a read-side concern.
fn write_sheet<'a>(
    out_path: &Path,
    rows: impl Iterator<Item = &'a [calamine::Data]>,
    request: &ConvertRequest,
) -> Result<(), ConvertError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(request.delimiter.unwrap_or(b','))
            .quote(request.quote.unwrap_or(b'"'))
            .quote_style(request.quoting.style())
            .from_writer(&mut buf);
        for row in rows {
            let record: Vec<String> =
                row.iter().map(|cell| CellValue::from(cell).to_text()).collect();
            writer.write_record(&record)?;
        }
        writer.flush().map_err(|e| ConvertError::io(out_path, e))?;
    }

    // The csv writer produced UTF-8; transcode only if asked for more.
    let text = String::from_utf8_lossy(&buf);
    encoding::write_text(out_path, &text, request.encoding)
}
