//! Descriptive statistics from a list of numbers.
//!
//! The [`stats`] module is the computational core: six pure functions (plus
//! a [`Summary`] aggregate) over a caller-supplied sample of finite `f64`s.
//! The [`input`] module is the adapter that turns comma-separated text into
//! such a sample, discarding tokens that are not finite numbers.

pub mod error;
pub mod input;
pub mod stats;

pub use error::{Result, StatsError};
pub use stats::{mean, median, mode, range, standard_deviation, variance, Summary};
