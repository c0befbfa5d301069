//! Per-row field extraction with tiered description inference.

use serde::Serialize;
use tracing::{debug, warn};

use catalogo_map::{ColumnMap, normalize_header, synonyms};
use catalogo_model::{CanonicalField, CellValue};

use crate::numeric::NumberFormat;

/// Where a row's description came from.
///
/// The tiers are ordered by decreasing confidence; everything past `Column`
/// counts as inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DescriptionSource {
    /// Direct value from the resolved description column.
    Column,
    /// First non-blank value from a column with a description-like name.
    SynonymScan,
    /// Longest qualifying free-text value from the exhaustive column scan.
    ExhaustiveScan,
    /// Remainder of the code field after splitting on its first whitespace run.
    CodeSplit,
    /// Synthesized "Produto N" placeholder.
    Placeholder,
}

impl DescriptionSource {
    pub fn is_inferred(&self) -> bool {
        !matches!(self, DescriptionSource::Column)
    }
}

/// Canonical values extracted from one row. Always best-effort, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedRecord {
    pub code: String,
    pub description: String,
    pub description_source: DescriptionSource,
    pub unit: String,
    pub tax_classification: String,
    pub retail_price: Option<f64>,
    pub wholesale_price: Option<f64>,
    pub promo_price: Option<f64>,
    pub stock: Option<f64>,
    pub purchase_price: Option<f64>,
    pub original_code: String,
    pub supplier: String,
    pub address: String,
    pub address2: String,
    pub warranty: String,
    pub pending: String,
    pub product_line: String,
    pub group: String,
}

/// Row extractor bound to one input file's headers and column map.
pub struct Extractor<'a> {
    headers: &'a [String],
    normalized_headers: Vec<String>,
    colmap: &'a ColumnMap,
    format: NumberFormat,
}

impl<'a> Extractor<'a> {
    pub fn new(headers: &'a [String], colmap: &'a ColumnMap, format: NumberFormat) -> Self {
        let normalized_headers = headers.iter().map(|header| normalize_header(header)).collect();
        Self {
            headers,
            normalized_headers,
            colmap,
            format,
        }
    }

    /// Extracts canonical values from one row. `row_index` is the zero-based
    /// position of the row in the source sheet.
    pub fn extract(&self, row: &[CellValue], row_index: usize) -> ExtractedRecord {
        let mut code = self.text_field(row, CanonicalField::Code);
        let (description, description_source) = self.infer_description(row, row_index, &mut code);

        ExtractedRecord {
            code,
            description,
            description_source,
            unit: self.text_field(row, CanonicalField::Unit),
            tax_classification: self.text_field(row, CanonicalField::TaxClassification),
            retail_price: self.numeric_field(row, CanonicalField::RetailPrice),
            wholesale_price: self.numeric_field(row, CanonicalField::WholesalePrice),
            promo_price: self.numeric_field(row, CanonicalField::PromoPrice),
            stock: self.numeric_field(row, CanonicalField::Stock),
            purchase_price: self.numeric_field(row, CanonicalField::PurchasePrice),
            original_code: self.text_field(row, CanonicalField::OriginalCode),
            supplier: self.text_field(row, CanonicalField::Supplier),
            address: self.text_field(row, CanonicalField::Address),
            address2: self.text_field(row, CanonicalField::Address2),
            warranty: self.text_field(row, CanonicalField::Warranty),
            pending: self.text_field(row, CanonicalField::Pending),
            product_line: self.text_field(row, CanonicalField::ProductLine),
            group: self.text_field(row, CanonicalField::Group),
        }
    }

    fn text_field(&self, row: &[CellValue], field: CanonicalField) -> String {
        match self.colmap.index_of(field) {
            Some(index) => row.get(index).map(CellValue::to_text).unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Empty cell -> None; numeric cell used as-is (NaN falls back to zero);
    /// text parsed with the configured locale format, parse failure -> zero.
    fn numeric_field(&self, row: &[CellValue], field: CanonicalField) -> Option<f64> {
        let index = self.colmap.index_of(field)?;
        match row.get(index)? {
            CellValue::Empty => None,
            CellValue::Number(number) => {
                if number.is_nan() {
                    Some(0.0)
                } else {
                    Some(*number)
                }
            }
            CellValue::Text(text) => {
                if text.trim().is_empty() {
                    None
                } else {
                    Some(self.format.parse(text).unwrap_or(0.0))
                }
            }
        }
    }

    /// Tiered description inference. Tier order is load-bearing: direct
    /// column, synonym-named column scan, exhaustive scan, code split,
    /// placeholder. The code-split tier rewrites `code` to the prefix.
    fn infer_description(
        &self,
        row: &[CellValue],
        row_index: usize,
        code: &mut String,
    ) -> (String, DescriptionSource) {
        let description_index = self.colmap.index_of(CanonicalField::Description);
        if let Some(index) = description_index {
            if let Some(cell) = row.get(index)
                && !cell.is_blank()
            {
                return (cell.to_text(), DescriptionSource::Column);
            }
        }

        if let Some(value) = self.synonym_scan(row, description_index) {
            return (value, DescriptionSource::SynonymScan);
        }

        if let Some(value) = self.exhaustive_scan(row, description_index) {
            return (value, DescriptionSource::ExhaustiveScan);
        }

        if let Some((prefix, rest)) = split_code(code) {
            debug!(row = row_index + 1, code = %prefix, "description taken from composite code");
            *code = prefix;
            return (rest, DescriptionSource::CodeSplit);
        }

        let placeholder = format!("Produto {}", row_index + 1);
        warn!(
            row = row_index + 1,
            "no description source found, substituting placeholder"
        );
        (placeholder, DescriptionSource::Placeholder)
    }

    /// First non-blank value from a column whose normalized name is a known
    /// description synonym.
    fn synonym_scan(&self, row: &[CellValue], description_index: Option<usize>) -> Option<String> {
        for (index, normalized) in self.normalized_headers.iter().enumerate() {
            if Some(index) == description_index {
                continue;
            }
            if !synonyms::DESCRIPTION_SCAN_NAMES.contains(&normalized.as_str()) {
                continue;
            }
            if let Some(cell) = row.get(index)
                && !cell.is_blank()
            {
                return Some(cell.to_text());
            }
        }
        None
    }

    /// Longest free-text value (length >= 3, at least one alphabetic char)
    /// from the remaining columns. Columns whose normalized name carries a
    /// code/price/value/fiscal/unit marker are never considered, and neither
    /// is the resolved code column: splitting a composite code is the next
    /// tier's job.
    fn exhaustive_scan(&self, row: &[CellValue], description_index: Option<usize>) -> Option<String> {
        let code_index = self.colmap.index_of(CanonicalField::Code);
        let mut best: Option<&str> = None;
        for index in 0..self.headers.len() {
            if Some(index) == description_index || Some(index) == code_index {
                continue;
            }
            let normalized = &self.normalized_headers[index];
            if synonyms::DESCRIPTION_EXCLUDE_MARKERS
                .iter()
                .any(|marker| normalized.contains(marker))
            {
                continue;
            }
            let Some(CellValue::Text(text)) = row.get(index) else {
                continue;
            };
            let trimmed = text.trim();
            if trimmed.chars().count() < 3 || !trimmed.chars().any(char::is_alphabetic) {
                continue;
            }
            match best {
                Some(current) if trimmed.chars().count() <= current.chars().count() => {}
                _ => best = Some(trimmed),
            }
        }
        best.map(str::to_string)
    }
}

/// Splits a composite code on its first whitespace run. Returns the cleaned
/// code prefix and the remainder, or `None` when there is nothing to split.
fn split_code(code: &str) -> Option<(String, String)> {
    let trimmed = code.trim();
    let split_at = trimmed.find(char::is_whitespace)?;
    let prefix = &trimmed[..split_at];
    let rest = trimmed[split_at..].trim_start();
    if prefix.is_empty() || rest.is_empty() {
        return None;
    }
    Some((prefix.to_string(), rest.to_string()))
}
