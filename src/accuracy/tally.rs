use serde::Serialize;

use crate::accuracy::classify::{classify_with_config, ClassifierConfig};
use crate::accuracy::{length_to_f64, AccuracyError};
use crate::core::types::{ErrorCategory, VariantColumn};

/// Per-category error counts for one reference/query contig pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTally {
    counts: [u64; ErrorCategory::ALL.len()],
}

/// Rate of one category, normalised to reference length
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRate {
    pub category: ErrorCategory,
    pub count: u64,
    pub rate: f64,
}

impl ErrorTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: ErrorCategory) {
        self.counts[category.index()] += 1;
    }

    /// Classify a column and record its category
    ///
    /// # Errors
    ///
    /// Propagates classification errors; nothing is recorded on failure.
    pub fn classify_and_record(
        &mut self,
        column: &VariantColumn,
        config: &ClassifierConfig,
    ) -> Result<ErrorCategory, AccuracyError> {
        let category = classify_with_config(column, config)?;
        self.record(category);
        Ok(category)
    }

    #[must_use]
    pub fn count(&self, category: ErrorCategory) -> u64 {
        self.counts[category.index()]
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Each category's count divided by the reference length, in report order
    ///
    /// # Errors
    ///
    /// Returns `AccuracyError::EmptyReference` for a zero reference length.
    pub fn rates(&self, reference_length: u64) -> Result<Vec<CategoryRate>, AccuracyError> {
        if reference_length == 0 {
            return Err(AccuracyError::EmptyReference);
        }
        let denominator = length_to_f64(reference_length);

        Ok(ErrorCategory::ALL
            .iter()
            .map(|&category| {
                let count = self.count(category);
                CategoryRate {
                    category,
                    count,
                    rate: length_to_f64(count) / denominator,
                }
            })
            .collect())
    }
}

/// Format rates as one tab-separated line with seven decimal places
#[must_use]
pub fn format_rate_line(rates: &[CategoryRate]) -> String {
    let mut line = rates
        .iter()
        .map(|r| format!("{:.7}", r.rate))
        .collect::<Vec<_>>()
        .join("\t");
    line.push('\n');
    line
}
