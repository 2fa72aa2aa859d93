use thiserror::Error;

/// Why an uploaded dataset was refused.
///
/// All three cases are non-fatal: they abort the upload attempt that
/// produced them and leave the active portfolio untouched.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The uploaded text is not syntactically valid JSON. This fails
    /// before the shape test ever runs.
    #[error("Uploaded file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but the top-level value is not an array.
    #[error("Expected a JSON array of customer records")]
    NotAnArray,

    /// An array, but empty or with at least one record that fails the
    /// customer shape test. The offending record is not identified.
    #[error("Customer list is empty or contains a malformed record")]
    EmptyOrMalformed,
}

#[derive(Error, Debug)]
pub enum DeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
