//! Run-level counters, returned by the pipeline instead of living in
//! ambient mutable state.

use serde::Serialize;

use crate::extract::DescriptionSource;

/// Counts accumulated over one conversion run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Non-blank rows read from the input sheet.
    pub input_rows: usize,
    /// Rows successfully converted.
    pub converted: usize,
    /// Rows skipped by a conversion failure.
    pub failed: usize,
    /// Rows whose description did not come straight from a description column.
    pub inferred_descriptions: usize,
    /// Rows that ended up with a "Produto N" placeholder.
    pub placeholder_descriptions: usize,
}

impl RunStats {
    pub fn record_description(&mut self, source: DescriptionSource) {
        if source.is_inferred() {
            self.inferred_descriptions += 1;
        }
        if source == DescriptionSource::Placeholder {
            self.placeholder_descriptions += 1;
        }
    }

    /// Every input row must be accounted for, converted or failed.
    pub fn is_balanced(&self) -> bool {
        self.converted + self.failed == self.input_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_counts_as_inferred() {
        let mut stats = RunStats::default();
        stats.record_description(DescriptionSource::Placeholder);
        stats.record_description(DescriptionSource::CodeSplit);
        stats.record_description(DescriptionSource::Column);
        assert_eq!(stats.inferred_descriptions, 2);
        assert_eq!(stats.placeholder_descriptions, 1);
    }

    #[test]
    fn balance_invariant() {
        let stats = RunStats {
            input_rows: 5,
            converted: 4,
            failed: 1,
            ..RunStats::default()
        };
        assert!(stats.is_balanced());
    }
}
