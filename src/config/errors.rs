//! Configuration validation errors

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window_size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    #[error("items_per_page must be at least 1, got {0}")]
    InvalidPageSize(usize),

    #[error("min_query_len must be at least 1, got {0}")]
    InvalidMinQueryLength(usize),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
