use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("sample is empty: at least one finite value is required")]
    EmptySample,
}

pub type Result<T> = std::result::Result<T, StatsError>;
