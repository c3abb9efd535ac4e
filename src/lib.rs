//! csvxl: CSV <-> XLSX conversion library
//!
//! A library for converting tabular files between delimited text and
//! spreadsheet workbooks, with direction inferred from the file extension.

pub mod cli;
pub mod pipeline;
pub mod utils;
