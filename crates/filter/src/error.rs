//! Error types for the oread-filter crate.

use oread_strain::StrainError;

/// Error type for band-pass conditioning failures.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Returned when the pass band is empty or non-positive.
    #[error("invalid pass band: [{low} Hz, {high} Hz]")]
    InvalidBand {
        /// Lower cutoff frequency.
        low: f64,
        /// Upper cutoff frequency.
        high: f64,
    },

    /// Returned when the upper cutoff reaches the Nyquist frequency.
    #[error("upper cutoff {high} Hz at or above Nyquist frequency {nyquist} Hz")]
    Nyquist {
        /// Upper cutoff frequency.
        high: f64,
        /// Nyquist frequency of the input series.
        nyquist: f64,
    },

    /// Wraps a failure from the filter design library.
    #[error("filter design failed: {reason}")]
    Design {
        /// Description of the underlying design failure.
        reason: String,
    },

    /// Returned when the filtered output fails series validation.
    #[error("filtered series invalid: {0}")]
    Output(#[from] StrainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_band() {
        let err = FilterError::InvalidBand { low: 400.0, high: 30.0 };
        assert_eq!(err.to_string(), "invalid pass band: [400 Hz, 30 Hz]");
    }

    #[test]
    fn error_nyquist() {
        let err = FilterError::Nyquist { high: 600.0, nyquist: 512.0 };
        let msg = err.to_string();
        assert!(msg.contains("600 Hz"));
        assert!(msg.contains("512 Hz"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<FilterError>();
    }
}
