use std::path::PathBuf;

use catalogo_output::WrittenOutput;
use catalogo_transform::RunStats;

#[derive(Debug)]
pub struct ConversionResult {
    pub input: PathBuf,
    /// File actually produced; `None` when every row failed.
    pub written: Option<WrittenOutput>,
    pub stats: RunStats,
    pub failures: Vec<RowFailure>,
    pub has_errors: bool,
}

#[derive(Debug, Clone)]
pub struct RowFailure {
    /// 1-based row position in the source sheet.
    pub row: usize,
    pub message: String,
}
