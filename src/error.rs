use crate::types::Category;
use thiserror::Error;

/// Every failure is fatal to a run; no partial report is produced.
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Unable to read \"{resource}\": {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: csv::Error,
    },
    #[error("Line {line}: value \"{value}\" for \"{label}\" is not a number")]
    MalformedNumericField {
        line: u64,
        label: String,
        value: String,
    },
    #[error("{category} expects {expected} values, found {actual}")]
    ArityMismatch {
        category: Category,
        expected: usize,
        actual: usize,
    },
    #[error("Line {line}: data found after the last of the six sections")]
    UnexpectedSection { line: u64 },
    #[error("{category} section supplied more than once")]
    DuplicateSection { category: Category },
}

pub type Result<T> = std::result::Result<T, FootprintError>;
