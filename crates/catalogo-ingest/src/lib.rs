//! Spreadsheet ingestion.
//!
//! Reads the first sheet of a workbook into a [`SheetTable`]: the first row
//! becomes the header list, subsequent non-blank rows become positional
//! [`CellValue`] rows padded to the header width. Workbooks that fail a
//! strict xlsx open are retried once with calamine's format auto-detection
//! before the run aborts.

use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, open_workbook, open_workbook_auto};
use thiserror::Error;
use tracing::{debug, warn};

use catalogo_model::CellValue;

/// Errors raised while reading the input workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook {path} has no sheets")]
    NoSheets { path: PathBuf },
    #[error("cannot read sheet '{sheet}' of {path}: {source}")]
    Sheet {
        sheet: String,
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
}

/// One input sheet: headers plus positional data rows.
///
/// Blank rows are already dropped; every remaining row has exactly
/// `headers.len()` cells. Row order matches the source file.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads the first sheet of the workbook at `path`.
///
/// A strict xlsx open is attempted first; on failure the file is re-opened
/// with format auto-detection (older `.xls` exports and mislabelled files
/// show up regularly in the wild). Only when both fail does the error
/// propagate.
pub fn read_sheet(path: &Path) -> Result<SheetTable, IngestError> {
    let range = match open_workbook::<Xlsx<_>, _>(path) {
        Ok(mut workbook) => first_sheet_range(&mut workbook, path)?,
        Err(error) => {
            warn!(
                path = %path.display(),
                error = %error,
                "strict xlsx open failed, retrying with format auto-detection"
            );
            let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            first_sheet_range(&mut workbook, path)?
        }
    };
    let table = table_from_range(&range);
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "sheet read"
    );
    Ok(table)
}

fn first_sheet_range<RS, R>(workbook: &mut R, path: &Path) -> Result<Range<Data>, IngestError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Into<calamine::Error>,
{
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?;
    workbook
        .worksheet_range(&sheet)
        .map_err(|source| IngestError::Sheet {
            sheet,
            path: path.to_path_buf(),
            source: source.into(),
        })
}

fn table_from_range(range: &Range<Data>) -> SheetTable {
    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return SheetTable::default();
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    let mut rows = Vec::new();
    for raw_row in rows_iter {
        let mut row: Vec<CellValue> = Vec::with_capacity(headers.len());
        for index in 0..headers.len() {
            let cell = raw_row.get(index).unwrap_or(&Data::Empty);
            row.push(cell_value(cell));
        }
        if row.iter().all(CellValue::is_blank) {
            continue;
        }
        rows.push(row);
    }
    SheetTable { headers, rows }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().trim_matches('\u{feff}').to_string(),
        Data::Empty => String::new(),
        other => cell_value(other).to_text(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::from(text.clone()),
        Data::Float(number) => CellValue::Number(*number),
        Data::Int(number) => CellValue::Number(*number as f64),
        Data::Bool(flag) => CellValue::Text(flag.to_string()),
        Data::DateTime(datetime) => CellValue::Number(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::from(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_and_errors_become_empty() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::String("  ".to_string())), CellValue::Empty);
    }

    #[test]
    fn headers_lose_bom_and_padding() {
        assert_eq!(header_text(&Data::String("\u{feff} Código ".to_string())), "Código");
    }
}
