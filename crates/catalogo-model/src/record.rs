//! One fixed-shape output row.

use serde::{Deserialize, Serialize};

use crate::schema::{OUTPUT_COLUMNS, column_index};
use crate::value::CellValue;

/// A single converted row, aligned to [`OUTPUT_COLUMNS`].
///
/// Cells are stored positionally; every record carries the full column set so
/// the output shape is uniform across rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    cells: Vec<CellValue>,
}

impl OutputRecord {
    /// Wraps a full cell vector. The caller is responsible for producing one
    /// cell per output column, in schema order.
    pub fn new(cells: Vec<CellValue>) -> Self {
        debug_assert_eq!(cells.len(), OUTPUT_COLUMNS.len());
        Self { cells }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Looks a cell up by its literal column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        column_index(column).and_then(|index| self.cells.get(index))
    }
}
