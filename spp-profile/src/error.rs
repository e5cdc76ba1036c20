/// Error types for the profile library
use thiserror::Error;

/// Main error type for profile operations
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The profile file could not be opened or read
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// The reader could not split the input into records
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A row did not have exactly two fields
    #[error("Line {line}: expected 2 columns (kp, depth), found {found}")]
    ColumnCount { line: u64, found: usize },

    /// A field was not a finite number
    #[error("Line {line}: {column} value {value:?} is not a number")]
    NotNumeric {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// The input held no survey rows
    #[error("Profile contains no survey rows")]
    Empty,

    /// An axis interval override that is zero, negative or not finite
    #[error("Invalid axis interval: {0} (must be a positive number)")]
    InvalidInterval(f64),
}

/// Type alias for Results using ProfileError
pub type Result<T> = std::result::Result<T, ProfileError>;
