//! Error types for the oread-search crate.

use oread_strain::StrainError;

/// Error type for all fallible operations in the echo search core.
///
/// Every error is terminal for the current search invocation: the search is
/// a deterministic computation over fixed input, so nothing is retried.
/// Running out of data mid-scan is NOT an error; see
/// [`scan`](crate::scan) for the zero-padding policy.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Returned when a requested template or comparison window exceeds the
    /// available strain span.
    #[error("insufficient data: {0}")]
    InsufficientData(#[from] StrainError),

    /// Returned when the template window realizes too few samples.
    #[error("template too short: {samples} sample(s), need at least {min}")]
    TemplateTooShort {
        /// Number of samples the window realizes.
        samples: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the template window duration is not a positive, finite
    /// number of seconds.
    #[error("invalid template window duration: {duration} s")]
    InvalidWindow {
        /// The offending duration.
        duration: f64,
    },

    /// Returned when the template segment has zero variance, making scale
    /// normalization undefined (flat or clipped data).
    #[error("template segment has zero variance")]
    DegenerateTemplate,

    /// Returned when a comparison segment has zero variance.
    #[error("comparison segment at delay {delay_s} s has zero variance")]
    DegenerateSegment {
        /// Delay at which the flat segment was encountered.
        delay_s: f64,
    },

    /// Returned when the delay grid parameters are inconsistent.
    #[error("invalid delay grid: {reason}")]
    InvalidGrid {
        /// Description of the inconsistency.
        reason: String,
    },

    /// Returned when a correlation curve holds no entries.
    #[error("correlation curve is empty")]
    EmptyCurve,
}
