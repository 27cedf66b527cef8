//! Turns raw comma-separated text into a sample the statistics can consume.

use tracing::debug;

/// Parse comma-separated text into a sample of finite numbers.
///
/// Tokens are split on commas with surrounding whitespace trimmed; every
/// line of the input contributes tokens. Tokens that do not parse as a
/// finite number are discarded.
pub fn parse_sample(text: &str) -> Vec<f64> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut sample = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        for token in record.iter() {
            if token.is_empty() {
                continue;
            }
            match token.parse::<f64>() {
                Ok(v) if v.is_finite() => sample.push(v),
                _ => debug!("discarding invalid token: {token:?}"),
            }
        }
    }
    sample
}
