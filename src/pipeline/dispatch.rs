//! Extension-based routing between the two conversion directions.

use std::path::{Path, PathBuf};

use crate::pipeline::error::ConvertError;
use crate::pipeline::request::ConvertRequest;
use crate::pipeline::to_csv::{prepare_output_dir, sheets_to_csv};
use crate::pipeline::to_xlsx::csv_to_workbook;

/// The two directions the pipeline can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `.xls` / `.xlsx` input: write each sheet to its own CSV file.
    SpreadsheetToCsv,
    /// Any other input: write each delimited file as a workbook sheet.
    CsvToSpreadsheet,
}

impl Direction {
    /// Route purely on the filename suffix, ASCII case-insensitive.
    pub fn from_path(path: &Path) -> Direction {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("xls") | Some("xlsx") => Direction::SpreadsheetToCsv,
            _ => Direction::CsvToSpreadsheet,
        }
    }
}

/// Run one conversion request start to finish. Direction comes from the
/// first input path; the return value is the ordered list of files produced
/// (a single workbook, or one CSV per sheet per workbook input).
pub fn convert(request: &ConvertRequest) -> Result<Vec<PathBuf>, ConvertError> {
    match Direction::from_path(request.source.first_path()) {
        Direction::CsvToSpreadsheet => Ok(vec![csv_to_workbook(request)?]),
        Direction::SpreadsheetToCsv => {
            // The output-directory guard applies once per invocation, not
            // once per workbook.
            let out_dir = prepare_output_dir(request)?;
            let mut outputs = Vec::new();
            for input in request.source.resolve()? {
                outputs.extend(sheets_to_csv(request, &input, &out_dir)?);
            }
            Ok(outputs)
        }
    }
}
