//! Output serialization.
//!
//! Converted records go to a single-sheet xlsx workbook. When the xlsx write
//! fails the same rows are re-serialized as CSV next to the intended output
//! (same base name, `.csv` extension); only a failure of both propagates.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use thiserror::Error;
use tracing::{info, warn};

use catalogo_model::{CellValue, OUTPUT_COLUMNS, OUTPUT_SHEET_NAME, OutputRecord};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("xlsx write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("csv fallback failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv fallback failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Which file a write actually produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrittenOutput {
    Xlsx(PathBuf),
    Csv(PathBuf),
}

impl WrittenOutput {
    pub fn path(&self) -> &Path {
        match self {
            WrittenOutput::Xlsx(path) | WrittenOutput::Csv(path) => path,
        }
    }
}

/// Writes all records to `path`, falling back to CSV when the xlsx write
/// fails.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<WrittenOutput, OutputError> {
    match write_xlsx(path, records) {
        Ok(()) => {
            info!(path = %path.display(), rows = records.len(), "xlsx output written");
            Ok(WrittenOutput::Xlsx(path.to_path_buf()))
        }
        Err(error) => {
            let csv_path = path.with_extension("csv");
            warn!(
                path = %path.display(),
                fallback = %csv_path.display(),
                error = %error,
                "xlsx write failed, falling back to csv"
            );
            write_csv(&csv_path, records)?;
            info!(path = %csv_path.display(), rows = records.len(), "csv fallback written");
            Ok(WrittenOutput::Csv(csv_path))
        }
    }
}

fn write_xlsx(path: &Path, records: &[OutputRecord]) -> Result<(), OutputError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET_NAME)?;

    for (column, name) in OUTPUT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, column as u16, *name)?;
    }
    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        for (column, cell) in record.cells().iter().enumerate() {
            match cell {
                CellValue::Text(text) => {
                    worksheet.write_string(row, column as u16, text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row, column as u16, *number)?;
                }
                CellValue::Empty => {}
            }
        }
    }
    workbook.save(path)?;
    Ok(())
}

fn write_csv(path: &Path, records: &[OutputRecord]) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        let fields: Vec<String> = record.cells().iter().map(CellValue::to_text).collect();
        writer.write_record(&fields)?;
    }
    writer.flush()?;
    Ok(())
}
