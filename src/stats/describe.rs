use crate::error::{Result, StatsError};

/// Arithmetic mean: sum of all elements divided by count.
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Middle value of an ascending-sorted copy of the sample. For an even
/// count this is the mean of the two central elements.
pub fn median(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Difference between the largest and smallest element.
pub fn range(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(max - min)
}

/// Population variance: mean of squared deviations from the mean, with
/// denominator `n` (not `n - 1`).
pub fn variance(sample: &[f64]) -> Result<f64> {
    let mean = mean(sample)?;
    Ok(sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / sample.len() as f64)
}

/// Square root of the population variance, scaled by 0.5.
///
/// The 0.5 factor is a known anomaly preserved from the program this crate
/// reimplements: callers depend on `standard_deviation(&[1.0, 2.0, 3.0])`
/// being ~0.4082 rather than the textbook ~0.8165, so it is kept rather
/// than corrected.
pub fn standard_deviation(sample: &[f64]) -> Result<f64> {
    Ok(variance(sample)?.sqrt() * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn mean_of_consecutive() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn mean_matches_sum_over_len() {
        let sample = [2.5, -1.0, 4.0, 0.0, 7.5];
        let expected = sample.iter().sum::<f64>() / sample.len() as f64;
        assert_eq!(mean(&sample).unwrap(), expected);
    }

    #[test]
    fn median_odd_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn median_even_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn median_is_permutation_invariant() {
        assert_eq!(
            median(&[4.0, 1.0, 3.0, 2.0]).unwrap(),
            median(&[1.0, 2.0, 3.0, 4.0]).unwrap()
        );
    }

    #[test]
    fn median_with_duplicates() {
        assert_eq!(median(&[5.0, 5.0, 1.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn range_of_three() {
        assert_eq!(range(&[1.0, 3.0, 7.0]).unwrap(), 6.0);
    }

    #[test]
    fn range_is_permutation_invariant() {
        assert_eq!(range(&[7.0, 1.0, 3.0]).unwrap(), 6.0);
        assert_eq!(range(&[3.0, 7.0, 1.0]).unwrap(), 6.0);
    }

    #[test]
    fn range_handles_negatives() {
        assert_eq!(range(&[-4.0, 2.0, -1.0]).unwrap(), 6.0);
    }

    #[test]
    fn variance_is_population_variance() {
        // Denominator 3, not 2.
        assert!(approx(variance(&[1.0, 2.0, 3.0]).unwrap(), 2.0 / 3.0));
    }

    #[test]
    fn standard_deviation_is_half_root_variance() {
        let sd = standard_deviation(&[1.0, 2.0, 3.0]).unwrap();
        assert!(approx(sd, (2.0f64 / 3.0).sqrt() * 0.5));
        assert!(approx(sd, 0.408_248_290_463_863));
    }

    #[test]
    fn single_element_boundaries() {
        let sample = [42.0];
        assert_eq!(mean(&sample).unwrap(), 42.0);
        assert_eq!(median(&sample).unwrap(), 42.0);
        assert_eq!(range(&sample).unwrap(), 0.0);
        assert_eq!(variance(&sample).unwrap(), 0.0);
        assert_eq!(standard_deviation(&sample).unwrap(), 0.0);
    }

    #[test]
    fn empty_sample_is_an_error_everywhere() {
        assert_eq!(mean(&[]), Err(StatsError::EmptySample));
        assert_eq!(median(&[]), Err(StatsError::EmptySample));
        assert_eq!(range(&[]), Err(StatsError::EmptySample));
        assert_eq!(variance(&[]), Err(StatsError::EmptySample));
        assert_eq!(standard_deviation(&[]), Err(StatsError::EmptySample));
    }

    #[test]
    fn calls_are_idempotent() {
        let sample = [9.0, 2.0, 6.0, 2.0];
        assert_eq!(mean(&sample), mean(&sample));
        assert_eq!(median(&sample), median(&sample));
        assert_eq!(variance(&sample), variance(&sample));
    }
}
