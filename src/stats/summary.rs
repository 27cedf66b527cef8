use serde::Serialize;

use crate::error::Result;
use crate::stats::{mean, median, mode, range, standard_deviation, variance};

/// All six statistics for one sample.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Tied-modal values in first-occurrence order; `None` when every
    /// distinct value is equally frequent.
    pub mode: Option<Vec<f64>>,
    pub range: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl Summary {
    /// Compute every statistic for the sample. Fails on an empty sample.
    pub fn compute(sample: &[f64]) -> Result<Self> {
        Ok(Summary {
            count: sample.len(),
            mean: mean(sample)?,
            median: median(sample)?,
            mode: mode(sample)?,
            range: range(sample)?,
            variance: variance(sample)?,
            standard_deviation: standard_deviation(sample)?,
        })
    }

    /// Format as a multi-line labeled report.
    pub fn report(&self) -> String {
        format!(
            "Count: {}\nMean: {}\nMedian: {}\nMode: {}\nRange: {}\nVariance: {}\nStandard Deviation: {}\n",
            self.count,
            self.mean,
            self.median,
            self.mode_label(),
            self.range,
            self.variance,
            self.standard_deviation,
        )
    }

    /// The mode as displayed: tied values comma-joined, or the
    /// no-unique-mode marker.
    pub fn mode_label(&self) -> String {
        match &self.mode {
            Some(values) => values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            None => "no unique mode".to_string(),
        }
    }
}
