use crate::accuracy::{count_to_f64, AccuracyError};

/// Median identity, padding with zeros up to `total_count` sequences.
///
/// The padding accounts for sequences a basecaller dropped entirely: they
/// never appear in a table but still count as identity `0.0`.
///
/// # Errors
///
/// Returns `AccuracyError::NoIdentities` when there is nothing to summarise.
pub fn median_identity(
    identities: &[f64],
    total_count: Option<usize>,
) -> Result<f64, AccuracyError> {
    let mut values = identities.to_vec();
    if let Some(total) = total_count {
        if values.len() < total {
            values.resize(total, 0.0);
        }
    }
    if values.is_empty() {
        return Err(AccuracyError::NoIdentities);
    }

    values.sort_by(f64::total_cmp);
    let middle = values.len() / 2;
    if values.len() % 2 == 1 {
        Ok(values[middle])
    } else {
        Ok((values[middle - 1] + values[middle]) / 2.0)
    }
}

/// Mean identity over aligned sequences only
#[must_use]
pub fn mean_aligned_identity(identities: &[f64]) -> Option<f64> {
    let aligned: Vec<f64> = identities.iter().copied().filter(|&x| x > 0.0).collect();
    if aligned.is_empty() {
        None
    } else {
        Some(aligned.iter().sum::<f64>() / count_to_f64(aligned.len()))
    }
}
