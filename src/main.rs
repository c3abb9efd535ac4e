//! csvxl: CSV <-> XLSX conversion CLI
//!
//! A command-line tool for converting tabular files between delimited
//! text and spreadsheet workbooks, inferring direction from the input
//! file extension.

mod cli;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::Direction;
use utils::{create_spinner, finish_with_success};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let request = cli.to_request()?;

    let direction = Direction::from_path(request.source.first_path());
    let label = match direction {
        Direction::CsvToSpreadsheet => "Converting CSV to workbook",
        Direction::SpreadsheetToCsv => "Converting workbook to CSV",
    };

    println!("\n {} {}", style("◆").cyan().bold(), label);
    for input in &cli.input {
        println!("   Input:  {}", style(input.display()).dim());
    }
    println!();

    let spinner = create_spinner("Converting...");
    let outputs = pipeline::convert(&request)?;
    finish_with_success(
        &spinner,
        &format!(
            "Wrote {} file{}",
            outputs.len(),
            if outputs.len() == 1 { "" } else { "s" }
        ),
    );

    for path in &outputs {
        println!("   {}", style(path.display()).dim());
    }
    println!();
    println!(" {} Conversion complete!", style("✓").green().bold());

    Ok(())
}
