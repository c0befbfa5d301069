//! Column resolution: bind raw headers to canonical fields.

use std::collections::BTreeMap;

use serde::Serialize;

use catalogo_model::CanonicalField;

use crate::normalize::normalize_header;
use crate::synonyms;

/// A raw header bound to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    /// Zero-based column position in the source sheet.
    pub index: usize,
    /// Header exactly as found in the source file.
    pub header: String,
}

/// Mapping from canonical field to the source column that supplies it.
///
/// Built once per input file, read-only afterwards. Fields with no matching
/// header are simply absent; extraction degrades to defaults for them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnMap {
    resolved: BTreeMap<CanonicalField, ResolvedColumn>,
}

impl ColumnMap {
    pub fn get(&self, field: CanonicalField) -> Option<&ResolvedColumn> {
        self.resolved.get(&field)
    }

    pub fn index_of(&self, field: CanonicalField) -> Option<usize> {
        self.resolved.get(&field).map(|column| column.index)
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.resolved.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &ResolvedColumn)> {
        self.resolved.iter().map(|(field, column)| (*field, column))
    }
}

/// Resolves every canonical field against the sheet headers.
///
/// Per field, candidates are tried in priority order: exact match first, then
/// a normalized match (trim, NFD, strip combining marks, lowercase) scanning
/// headers in their original order. Unresolved fields are not an error.
pub fn resolve(headers: &[String]) -> ColumnMap {
    let normalized: Vec<String> = headers.iter().map(|header| normalize_header(header)).collect();
    let mut resolved = BTreeMap::new();
    for field in CanonicalField::ALL {
        if let Some(column) = find_column(headers, &normalized, synonyms::candidates(field)) {
            resolved.insert(field, column);
        }
    }
    ColumnMap { resolved }
}

fn find_column(
    headers: &[String],
    normalized: &[String],
    candidates: &[&str],
) -> Option<ResolvedColumn> {
    for candidate in candidates {
        if let Some(index) = headers.iter().position(|header| header == candidate) {
            return Some(ResolvedColumn {
                index,
                header: headers[index].clone(),
            });
        }
        let candidate_normalized = normalize_header(candidate);
        if let Some(index) = normalized
            .iter()
            .position(|header| *header == candidate_normalized)
        {
            return Some(ResolvedColumn {
                index,
                header: headers[index].clone(),
            });
        }
    }
    None
}
