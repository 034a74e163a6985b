use std::error::Error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, LogRegError>;

/// Errors raised by model fitting, prediction and loss reporting.
#[derive(Debug)]
pub enum LogRegError {
    /// Two arrays that must agree on a dimension do not.
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// `predict` was called before any `fit`.
    NotFitted,
    /// Writing a loss report failed.
    Io(io::Error),
}

impl fmt::Display for LogRegError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogRegError::ShapeMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                context, expected, found
            ),
            LogRegError::NotFitted => write!(f, "model has not been fitted"),
            LogRegError::Io(err) => write!(f, "failed to write loss report: {}", err),
        }
    }
}

impl Error for LogRegError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogRegError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LogRegError {
    fn from(err: io::Error) -> Self {
        LogRegError::Io(err)
    }
}

/// Fail with `ShapeMismatch` unless `found == expected`.
pub(crate) fn ensure_dim(context: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(LogRegError::ShapeMismatch {
            context,
            expected,
            found,
        });
    }
    Ok(())
}
