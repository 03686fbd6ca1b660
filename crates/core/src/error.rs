use thiserror::Error;
use validator::ValidationErrors;

/// Everything that can go wrong in this crate. All of these are surfaced
/// synchronously to the caller of the offending operation, nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// An input value doesn't fit the operation, e.g. a scalar field whose
    /// length doesn't match the grid, or an unknown colour map name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation isn't allowed in the current state, e.g. changing the
    /// hue of a colour map whose hue is fixed.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ValidationErrors),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
