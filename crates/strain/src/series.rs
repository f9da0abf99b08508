//! Validated, immutable strain time-series container.

use crate::error::StrainError;

/// Minimum number of samples in a valid series.
pub const MIN_SAMPLES: usize = 2;

/// A uniformly sampled, real-valued strain time series.
///
/// Wraps a `Vec<f64>` together with a sample rate and an absolute start time
/// (GPS seconds by convention) and guarantees:
/// - length >= 2
/// - all samples finite (no NaN or infinity)
/// - `sample_rate` finite and > 0
/// - `start_time` finite
///
/// Sample `i` sits at `start_time + i / sample_rate`; the series spans the
/// half-open interval `[start_time, end_time())`. A series is immutable once
/// constructed; sub-ranging produces a new, independent series.
///
/// # Example
///
/// ```ignore
/// use oread_strain::StrainSeries;
///
/// let series = StrainSeries::new(samples, 4096.0, 1126259446.0)?;
/// let ringdown = series.crop(1126259462.4, 1126259462.5)?;
/// ```
#[derive(Clone, Debug)]
pub struct StrainSeries {
    samples: Vec<f64>,
    sample_rate: f64,
    start_time: f64,
}

impl StrainSeries {
    /// Creates a new `StrainSeries` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`StrainError::TooShort`] | `samples.len() < 2` |
    /// | [`StrainError::NonFiniteData`] | any sample is NaN or infinite |
    /// | [`StrainError::InvalidSampleRate`] | `sample_rate` not finite or <= 0 |
    /// | [`StrainError::InvalidStartTime`] | `start_time` not finite |
    pub fn new(samples: Vec<f64>, sample_rate: f64, start_time: f64) -> Result<Self, StrainError> {
        if samples.len() < MIN_SAMPLES {
            return Err(StrainError::TooShort {
                len: samples.len(),
                min: MIN_SAMPLES,
            });
        }
        if !samples.iter().all(|v| v.is_finite()) {
            return Err(StrainError::NonFiniteData);
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(StrainError::InvalidSampleRate { rate: sample_rate });
        }
        if !start_time.is_finite() {
            return Err(StrainError::InvalidStartTime { value: start_time });
        }
        Ok(Self {
            samples,
            sample_rate,
            start_time,
        })
    }

    /// Returns the samples as a slice.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns the absolute start time in seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a valid `StrainSeries` is never empty (minimum length is 2).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the time between consecutive samples, `1 / sample_rate`.
    pub fn sample_period(&self) -> f64 {
        1.0 / self.sample_rate
    }

    /// Returns the duration of the series, `len / sample_rate`.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Returns one sample period past the last sample, `start_time + duration`.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration()
    }

    /// Returns the absolute time of sample `i`.
    pub fn time_at(&self, i: usize) -> f64 {
        self.start_time + i as f64 / self.sample_rate
    }

    /// Returns the nearest sample index for absolute time `t`.
    ///
    /// Negative values indicate a time before the start of the series; the
    /// result may also point past the last sample. Callers bound-check.
    pub fn index_at(&self, t: f64) -> isize {
        ((t - self.start_time) * self.sample_rate).round() as isize
    }

    /// Extracts the half-open time range `[start, end)` as a new series.
    ///
    /// Both endpoints snap to the nearest sample; the extracted length is
    /// `round((end - start) * sample_rate)` samples. The source series is
    /// not modified.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`StrainError::WindowOutOfRange`] | range extends outside the recorded span |
    /// | [`StrainError::TooShort`] | range realizes fewer than 2 samples |
    pub fn crop(&self, start: f64, end: f64) -> Result<Self, StrainError> {
        let n = ((end - start) * self.sample_rate).round();
        if !n.is_finite() || n < MIN_SAMPLES as f64 {
            return Err(StrainError::TooShort {
                len: if n.is_finite() && n > 0.0 { n as usize } else { 0 },
                min: MIN_SAMPLES,
            });
        }
        self.window(start, n as usize)
    }

    /// Extracts `n_samples` samples starting at the sample nearest to `start`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`StrainError::WindowOutOfRange`] | window extends outside the recorded span |
    pub fn window(&self, start: f64, n_samples: usize) -> Result<Self, StrainError> {
        let i0 = self.index_at(start);
        let out_of_range = || StrainError::WindowOutOfRange {
            start,
            end: start + n_samples as f64 / self.sample_rate,
            available_start: self.start_time,
            available_end: self.end_time(),
        };
        if i0 < 0 {
            return Err(out_of_range());
        }
        let i0 = i0 as usize;
        if i0 + n_samples > self.samples.len() {
            return Err(out_of_range());
        }
        Ok(Self {
            samples: self.samples[i0..i0 + n_samples].to_vec(),
            sample_rate: self.sample_rate,
            start_time: self.time_at(i0),
        })
    }
}

impl AsRef<[f64]> for StrainSeries {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
