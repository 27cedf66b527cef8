//! Pure descriptive statistics over a sample of finite numbers.
//!
//! Every function borrows the sample and never mutates it; `median` sorts a
//! copy. A zero-length sample is an error ([`StatsError::EmptySample`])
//! uniformly across all operations.
//!
//! [`StatsError::EmptySample`]: crate::error::StatsError::EmptySample

mod describe;
mod mode;
mod summary;

pub use describe::{mean, median, range, standard_deviation, variance};
pub use mode::mode;
pub use summary::Summary;
