//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the first sheet of the input workbook
//! 2. **Resolve**: Bind raw headers to canonical fields
//! 3. **Convert**: Extract and map every data row
//! 4. **Output**: Write the converted sheet (xlsx, CSV fallback)
//!
//! Rows fail individually; a failed row is logged, counted, and skipped while
//! the rest of the run continues.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span, warn};

use catalogo_ingest::read_sheet;
use catalogo_map::{ColumnMap, resolve};
use catalogo_model::OutputRecord;
use catalogo_output::write_records;
use catalogo_transform::{ConvertOptions, Extractor, RunStats, map_record};

use crate::types::{ConversionResult, RowFailure};

/// One conversion run, fully described.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
    /// Emit the resolved column map as JSON at debug level.
    pub dump_colmap: bool,
}

/// Runs the whole conversion.
///
/// Returns `Ok` with per-row failures recorded in the result; only fatal
/// conditions (unreadable input, both output formats failing) become `Err`.
pub fn run_conversion(request: &ConversionRequest) -> Result<ConversionResult> {
    if !request.input.exists() {
        bail!("input file not found: {}", request.input.display());
    }

    // ==== Stage 1: Ingest ====
    let stage_start = Instant::now();
    let table = {
        let _span = info_span!("ingest", path = %request.input.display()).entered();
        read_sheet(&request.input).context("read input workbook")?
    };
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        duration_ms = stage_start.elapsed().as_millis() as u64,
        "ingest complete"
    );

    // ==== Stage 2: Resolve columns ====
    let colmap = resolve(&table.headers);
    log_column_map(&colmap, request.dump_colmap);

    // ==== Stage 3: Convert rows ====
    let stage_start = Instant::now();
    let mut stats = RunStats {
        input_rows: table.rows.len(),
        ..RunStats::default()
    };
    let mut records: Vec<OutputRecord> = Vec::with_capacity(table.rows.len());
    let mut failures: Vec<RowFailure> = Vec::new();

    let extractor = Extractor::new(&table.headers, &colmap, request.options.number_format);
    let progress = ProgressBar::new(table.rows.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} linhas") {
        progress.set_style(style);
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        let extracted = extractor.extract(row, row_index);
        match map_record(&extracted, row_index, &request.options) {
            Ok(record) => {
                stats.record_description(extracted.description_source);
                stats.converted += 1;
                records.push(record);
            }
            Err(error) => {
                stats.failed += 1;
                warn!(row = row_index + 1, error = %error, "row skipped");
                failures.push(RowFailure {
                    row: row_index + 1,
                    message: error.to_string(),
                });
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    info!(
        converted = stats.converted,
        failed = stats.failed,
        inferred = stats.inferred_descriptions,
        placeholders = stats.placeholder_descriptions,
        duration_ms = stage_start.elapsed().as_millis() as u64,
        "conversion complete"
    );

    // ==== Stage 4: Output ====
    // An input with rows where every one failed produces no file at all; an
    // input with no data rows still gets a headers-only output.
    if records.is_empty() && stats.failed > 0 {
        warn!(
            failed = stats.failed,
            "no rows converted, output file not written"
        );
        return Ok(ConversionResult {
            input: request.input.clone(),
            written: None,
            stats,
            failures,
            has_errors: true,
        });
    }

    let stage_start = Instant::now();
    let written = {
        let _span = info_span!("output", path = %request.output.display()).entered();
        write_records(&request.output, &records).context("write converted output")?
    };
    info!(
        path = %written.path().display(),
        duration_ms = stage_start.elapsed().as_millis() as u64,
        "output complete"
    );

    Ok(ConversionResult {
        input: request.input.clone(),
        written: Some(written),
        stats,
        failures,
        has_errors: false,
    })
}

fn log_column_map(colmap: &ColumnMap, dump: bool) {
    for (field, column) in colmap.iter() {
        debug!(
            field = field.as_str(),
            column = column.index,
            header = %column.header,
            "column resolved"
        );
    }
    if dump {
        match serde_json::to_string_pretty(colmap) {
            Ok(json) => debug!(colmap = %json, "resolved column map"),
            Err(error) => warn!(error = %error, "cannot serialize column map"),
        }
    }
    if colmap.is_empty() {
        warn!("no headers matched any known field, all rows will degrade to placeholders");
    }
}
