//! Loosely-typed spreadsheet cell values and their text form.

use calamine::Data;

/// A spreadsheet cell as the CSV-writing path consumes it.
///
/// Calamine's richer cell types collapse into this three-way variant the
/// same way xlrd's `row_values` presented them to the original tool:
/// booleans become 1/0, dates keep their raw serial number, and error
/// cells carry their error-code text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Render the cell for delimited-text output. Numbers use the plain
    /// `f64` display form: no locale separators and no trailing `.0` on
    /// integral values.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}
