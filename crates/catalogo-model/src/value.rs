//! Cell values as they travel through the pipeline.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell, both on the input and the output side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// True when the cell carries no usable content.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(number) => number.is_nan(),
        }
    }

    /// Coerces the cell to trimmed text.
    ///
    /// Numbers with no fractional part render without a decimal point so
    /// numeric product codes come out as "123", not "123.0".
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.trim().to_string(),
            CellValue::Number(number) => {
                if number.is_nan() {
                    String::new()
                } else if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
                    format!("{}", *number as i64)
                } else {
                    format!("{number}")
                }
            }
        }
    }

    /// Returns the numeric payload when the cell is already a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(number) if !number.is_nan() => Some(*number),
            _ => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        if text.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(text)
        }
    }
}
