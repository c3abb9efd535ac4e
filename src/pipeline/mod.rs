//! Pipeline module - the format-conversion pipeline proper.

pub mod cell;
pub mod dispatch;
pub mod encoding;
pub mod error;
pub mod request;
pub mod sniff;
pub mod to_csv;
pub mod to_xlsx;

pub use cell::CellValue;
pub use dispatch::{convert, Direction};
pub use error::ConvertError;
pub use request::{ConvertRequest, InputSource, QuoteMode};
pub use sniff::sniff_delimiter;
pub use to_csv::{prepare_output_dir, sheets_to_csv, workbook_to_csv};
pub use to_xlsx::csv_to_workbook;
