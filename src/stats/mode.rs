use std::collections::HashMap;

use crate::error::{Result, StatsError};

/// Most frequently occurring value(s) in the sample, in first-occurrence
/// order. Returns `Ok(None)` when every distinct value appears an equal
/// number of times (including the all-unique case, where every count is 1),
/// meaning there is no unique mode.
pub fn mode(sample: &[f64]) -> Result<Option<Vec<f64>>> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }

    // Count by numeric equality; first-occurrence order lives in a parallel
    // list since HashMap iteration order is unspecified.
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut order: Vec<f64> = Vec::new();
    for &v in sample {
        let count = counts.entry(value_key(v)).or_insert(0);
        if *count == 0 {
            order.push(v);
        }
        *count += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    let min = counts.values().copied().min().unwrap_or(0);
    if max == min {
        return Ok(None);
    }

    let modes: Vec<f64> = order
        .iter()
        .copied()
        .filter(|&v| counts[&value_key(v)] == max)
        .collect();
    Ok(Some(modes))
}

/// Counting key with numeric equality, so `-0.0` folds into `0.0`. Samples
/// are finite by contract, which keeps NaN bit patterns out of the table.
fn value_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}
