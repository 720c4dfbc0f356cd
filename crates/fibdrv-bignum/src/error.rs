//! Error type for big integer operations.

/// Errors reported by the big integer engine.
///
/// Every operation that may grow a word buffer returns this instead of
/// aborting, so callers can recover from allocation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BnError {
    /// The word buffer could not be reserved or grown.
    #[error("allocation of {words} words failed")]
    Alloc {
        /// Total word count that was requested.
        words: usize,
    },

    /// An argument was outside the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The slot passed to `release` no longer holds a value.
    #[error("big integer already released")]
    Released,

    /// A decimal numeral could not be parsed.
    #[error("invalid decimal numeral: {0:?}")]
    Parse(String),
}
