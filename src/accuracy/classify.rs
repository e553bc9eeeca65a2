use crate::accuracy::AccuracyError;
use crate::core::types::{ErrorCategory, VariantColumn, GAP};

/// Dcm methylation recognition sites
pub const DCM_MOTIFS: [&str; 2] = ["CCAGG", "CCTGG"];

/// Default shortest run counted as a homopolymer
pub const DEFAULT_MIN_HOMOPOLYMER_LENGTH: usize = 3;

/// Indel columns need the center and both neighbours
pub const MIN_CONTEXT_LENGTH: usize = 3;

/// Configuration for error classification
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Shortest reference run that counts as a homopolymer
    pub min_homopolymer_length: usize,
    /// Motifs that take priority over every other category
    pub motifs: Vec<Vec<u8>>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_homopolymer_length: DEFAULT_MIN_HOMOPOLYMER_LENGTH,
            motifs: DCM_MOTIFS.iter().map(|m| m.as_bytes().to_vec()).collect(),
        }
    }
}

/// Classify a variant column using the default configuration.
///
/// # Errors
///
/// See [`classify_with_config`].
pub fn classify(column: &VariantColumn) -> Result<ErrorCategory, AccuracyError> {
    classify_with_config(column, &ClassifierConfig::default())
}

/// Assign exactly one error category to a variant column.
///
/// The first matching rule wins: motif, homopolymer deletion, homopolymer
/// insertion, other deletion, other insertion, substitution.
///
/// # Errors
///
/// Returns `AccuracyError::ContextTooShort` for an indel column whose context
/// is shorter than [`MIN_CONTEXT_LENGTH`].
pub fn classify_with_config(
    column: &VariantColumn,
    config: &ClassifierConfig,
) -> Result<ErrorCategory, AccuracyError> {
    let context = column.ref_context.as_slice();
    let is_indel = column.is_deletion() || column.is_insertion();
    if is_indel && context.len() < MIN_CONTEXT_LENGTH {
        return Err(AccuracyError::ContextTooShort {
            length: context.len(),
            required: MIN_CONTEXT_LENGTH,
        });
    }

    if contains_motif(context, &config.motifs) {
        return Ok(ErrorCategory::MethylationMotif);
    }
    if column.is_deletion() && deletion_homopolymer_length(context) >= config.min_homopolymer_length
    {
        return Ok(ErrorCategory::HomopolymerDeletion);
    }
    if column.is_insertion()
        && insertion_homopolymer_length(context) >= config.min_homopolymer_length
    {
        return Ok(ErrorCategory::HomopolymerInsertion);
    }
    if column.is_deletion() {
        return Ok(ErrorCategory::OtherDeletion);
    }
    if column.is_insertion() {
        return Ok(ErrorCategory::OtherInsertion);
    }
    Ok(ErrorCategory::Substitution)
}

/// Does the context, minus its outermost characters and gaps, hold a motif?
fn contains_motif(context: &[u8], motifs: &[Vec<u8>]) -> bool {
    if context.len() < 2 {
        return false;
    }
    let inner: Vec<u8> = context[1..context.len() - 1]
        .iter()
        .copied()
        .filter(|&b| b != GAP)
        .collect();

    motifs
        .iter()
        .filter(|motif| !motif.is_empty())
        .any(|motif| inner.windows(motif.len()).any(|window| window == motif.as_slice()))
}

/// Run length through the center base of a deletion context
fn deletion_homopolymer_length(context: &[u8]) -> usize {
    let middle = context.len() / 2;
    run_length(context, middle, context[middle])
}

/// Run length an insertion extends; 1 when its two neighbours differ
fn insertion_homopolymer_length(context: &[u8]) -> usize {
    let middle = context.len() / 2;
    let left = context[middle - 1];
    let right = context[middle + 1];
    if left != right {
        return 1;
    }
    run_length(context, middle, left)
}

/// Extend from `middle` while neighbours equal `base`, then count non-gap characters
fn run_length(context: &[u8], middle: usize, base: u8) -> usize {
    let mut start = middle;
    while start > 0 && context[start - 1] == base {
        start -= 1;
    }
    let mut end = middle + 1;
    while end < context.len() && context[end] == base {
        end += 1;
    }
    context[start..end].iter().filter(|&&b| b != GAP).count()
}
