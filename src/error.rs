use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type covering parsing and I/O.
///
/// Returned by convenience methods like
/// [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum GeoffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
