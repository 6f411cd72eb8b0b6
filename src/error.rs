use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by generator construction and container population.
///
/// None of these are transient; they signal bad caller input or a failed
/// entropy read and are never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested interval is empty.
    #[error("invalid range: low {low} exceeds high {high}")]
    InvalidRange {
        /// Lower bound as requested by the caller.
        low: String,
        /// Upper bound as requested by the caller.
        high: String,
    },

    /// A negative element count was passed to `append_generated`.
    #[error("invalid count: {count} is negative")]
    InvalidCount {
        /// The offending count.
        count: isize,
    },

    /// The operating-system entropy source failed to produce a seed.
    /// There is no fallback to a fixed seed; construction fails instead.
    #[error("entropy source unavailable: {message}")]
    SeedUnavailable {
        /// Error message from the entropy source.
        message: String,
    },
}
