use thiserror::Error;

/// Longest header the menu accepts.
pub const MAX_HEADER_LEN: usize = 30;

/// Everything that can go wrong while loading, filtering or aggregating.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no data loaded")]
    EmptyDataset,
    #[error("no readings for zip code {zip} at {time}")]
    NoMatchingItems { zip: String, time: String },
    #[error("zip code {0} is not in the dataset")]
    KeyNotFound(String),
    #[error("item {index} is not on the menu (1-{len})")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("row {row}: '{value}' is not a number")]
    Parse {
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("row {row}: concentration {value} is not a finite, non-negative number")]
    InvalidConcentration { row: usize, value: f64 },
    #[error("row {row}: expected at least 6 columns, found {found}")]
    MissingColumns { row: usize, found: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("header is {0} characters long, at most 30 allowed")]
    HeaderTooLong(usize),
}

pub type Result<T, E = DataError> = std::result::Result<T, E>;
