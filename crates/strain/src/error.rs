//! Error types for the oread-strain crate.

/// Error type for all fallible operations on strain series.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StrainError {
    /// Returned when the input series is shorter than the minimum required length.
    #[error("series too short: got {len} sample(s), need at least {min}")]
    TooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the sample data contains non-finite values (NaN or infinity).
    #[error("strain data contains non-finite values")]
    NonFiniteData,

    /// Returned when the sample rate is zero, negative, or non-finite.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The offending sample rate.
        rate: f64,
    },

    /// Returned when the start time is non-finite.
    #[error("invalid start time: {value}")]
    InvalidStartTime {
        /// The offending start time.
        value: f64,
    },

    /// Returned when a requested sub-range falls outside the recorded span.
    #[error(
        "window [{start}, {end}) outside recorded span [{available_start}, {available_end})"
    )]
    WindowOutOfRange {
        /// Requested window start (absolute seconds).
        start: f64,
        /// Requested window end (absolute seconds).
        end: f64,
        /// First recorded time.
        available_start: f64,
        /// One sample period past the last recorded time.
        available_end: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_too_short() {
        let err = StrainError::TooShort { len: 1, min: 2 };
        assert_eq!(err.to_string(), "series too short: got 1 sample(s), need at least 2");
    }

    #[test]
    fn error_non_finite() {
        let err = StrainError::NonFiniteData;
        assert_eq!(err.to_string(), "strain data contains non-finite values");
    }

    #[test]
    fn error_invalid_sample_rate() {
        let err = StrainError::InvalidSampleRate { rate: -1.0 };
        assert_eq!(err.to_string(), "invalid sample rate: -1 Hz");
    }

    #[test]
    fn error_window_out_of_range() {
        let err = StrainError::WindowOutOfRange {
            start: 3.9,
            end: 4.1,
            available_start: 0.0,
            available_end: 4.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("[3.9, 4.1)"));
        assert!(msg.contains("[0, 4)"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<StrainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StrainError>();
    }
}
