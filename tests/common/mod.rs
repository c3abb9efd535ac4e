//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader};
use csvxl::pipeline::{ConvertRequest, InputSource, QuoteMode};
use tempfile::TempDir;

/// Write a text fixture into the temp dir and return its path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Build a workbook fixture with string cells, one entry per sheet.
pub fn build_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet().set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                worksheet.write_string(r as u32, c as u16, *cell).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Read one sheet of a workbook back as strings.
pub fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Sheet names of a workbook, in workbook order.
pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook = open_workbook_auto(path).unwrap();
    workbook.sheet_names().to_owned()
}

/// A request with the CLI's default settings (comma, UTF-8, backslash
/// escape, double-quote, minimal quoting).
pub fn default_request(paths: &[PathBuf], output: Option<PathBuf>) -> ConvertRequest {
    ConvertRequest::new(
        InputSource::from_paths(paths).unwrap(),
        output,
        Some(b','),
        encoding_rs::UTF_8,
        Some(b'\\'),
        Some(b'"'),
        QuoteMode::Minimal,
    )
}
