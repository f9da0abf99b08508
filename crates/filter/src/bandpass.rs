//! Butterworth band-pass conditioning of strain series.

use iir_filters::filter::{DirectForm2Transposed, Filter};
use iir_filters::filter_design::{FilterType, butter};
use iir_filters::sos::zpk2sos;
use tracing::debug;

use oread_strain::StrainSeries;

use crate::error::FilterError;

/// Configuration for the Butterworth band-pass pre-filter.
///
/// Use the builder methods to customize the pass band.
///
/// # Example
///
/// ```ignore
/// use oread_filter::BandpassConfig;
///
/// let config = BandpassConfig::new()
///     .with_low_hz(35.0)
///     .with_high_hz(350.0);
/// ```
#[derive(Clone, Debug)]
pub struct BandpassConfig {
    /// Lower cutoff frequency in Hz.
    low_hz: f64,
    /// Upper cutoff frequency in Hz.
    high_hz: f64,
    /// Filter order (higher = steeper rolloff).
    order: u32,
}

impl BandpassConfig {
    /// Creates a new `BandpassConfig` with default parameters.
    ///
    /// Defaults: `low_hz = 30.0`, `high_hz = 400.0`, `order = 4`, covering
    /// the ringdown band of stellar-mass binary mergers.
    pub fn new() -> Self {
        Self {
            low_hz: 30.0,
            high_hz: 400.0,
            order: 4,
        }
    }

    /// Sets the lower cutoff frequency.
    pub fn with_low_hz(mut self, low_hz: f64) -> Self {
        self.low_hz = low_hz;
        self
    }

    /// Sets the upper cutoff frequency.
    pub fn with_high_hz(mut self, high_hz: f64) -> Self {
        self.high_hz = high_hz;
        self
    }

    /// Sets the filter order.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Returns the lower cutoff frequency.
    pub fn low_hz(&self) -> f64 {
        self.low_hz
    }

    /// Returns the upper cutoff frequency.
    pub fn high_hz(&self) -> f64 {
        self.high_hz
    }

    /// Returns the filter order.
    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Default for BandpassConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a Butterworth band-pass filter and returns a new series.
///
/// The filter runs causally over the samples (direct form II transposed);
/// the input series is not modified. Sample rate and start time carry over
/// unchanged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FilterError::InvalidBand`] | `low_hz <= 0` or `low_hz >= high_hz` |
/// | [`FilterError::Nyquist`] | `high_hz >= sample_rate / 2` |
/// | [`FilterError::Design`] | the design library rejects the parameters |
/// | [`FilterError::Output`] | filtering produced non-finite samples |
pub fn bandpass_filter(
    series: &StrainSeries,
    config: &BandpassConfig,
) -> Result<StrainSeries, FilterError> {
    let low = config.low_hz();
    let high = config.high_hz();
    if !low.is_finite() || !high.is_finite() || low <= 0.0 || low >= high {
        return Err(FilterError::InvalidBand { low, high });
    }
    let nyquist = series.sample_rate() / 2.0;
    if high >= nyquist {
        return Err(FilterError::Nyquist { high, nyquist });
    }

    let zpk = butter(
        config.order(),
        FilterType::BandPass(low, high),
        series.sample_rate(),
    )
    .map_err(|e| FilterError::Design {
        reason: format!("{e:?}"),
    })?;
    let sos = zpk2sos(&zpk, None).map_err(|e| FilterError::Design {
        reason: format!("{e:?}"),
    })?;
    let mut filter = DirectForm2Transposed::new(&sos);

    let filtered: Vec<f64> = series.samples().iter().map(|&x| filter.filter(x)).collect();

    debug!(
        low_hz = low,
        high_hz = high,
        order = config.order(),
        n_samples = filtered.len(),
        "band-pass applied"
    );

    Ok(StrainSeries::new(
        filtered,
        series.sample_rate(),
        series.start_time(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine_series(freq_hz: f64, sample_rate: f64, duration: f64) -> StrainSeries {
        let n = (duration * sample_rate) as usize;
        let samples: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
            .collect();
        StrainSeries::new(samples, sample_rate, 0.0).unwrap()
    }

    /// RMS after discarding the first `skip` samples of settling transient.
    fn settled_rms(series: &StrainSeries, skip: usize) -> f64 {
        oread_stats::rms(&series.samples()[skip..])
    }

    #[test]
    fn config_defaults() {
        let config = BandpassConfig::new();
        assert_eq!(config.low_hz(), 30.0);
        assert_eq!(config.high_hz(), 400.0);
        assert_eq!(config.order(), 4);
    }

    #[test]
    fn in_band_sine_passes() {
        let series = sine_series(200.0, 4096.0, 1.0);
        let filtered = bandpass_filter(&series, &BandpassConfig::new()).unwrap();

        let input_rms = settled_rms(&series, 1024);
        let output_rms = settled_rms(&filtered, 1024);
        let attenuation_db = 20.0 * (output_rms / input_rms).log10();
        assert!(
            attenuation_db > -3.0,
            "in-band tone attenuated by {attenuation_db:.2} dB"
        );
    }

    #[test]
    fn out_of_band_sine_attenuates() {
        let series = sine_series(5.0, 4096.0, 2.0);
        let filtered = bandpass_filter(&series, &BandpassConfig::new()).unwrap();

        let input_rms = settled_rms(&series, 2048);
        let output_rms = settled_rms(&filtered, 2048);
        let attenuation_db = 20.0 * (output_rms / input_rms).log10();
        assert!(
            attenuation_db < -20.0,
            "5 Hz tone only attenuated by {attenuation_db:.2} dB"
        );
    }

    #[test]
    fn output_preserves_metadata() {
        let series = sine_series(100.0, 2048.0, 1.0);
        let filtered = bandpass_filter(&series, &BandpassConfig::new()).unwrap();
        assert_eq!(filtered.len(), series.len());
        assert_eq!(filtered.sample_rate(), series.sample_rate());
        assert_eq!(filtered.start_time(), series.start_time());
    }

    #[test]
    fn inverted_band_rejected() {
        let series = sine_series(100.0, 4096.0, 0.5);
        let config = BandpassConfig::new().with_low_hz(400.0).with_high_hz(30.0);
        let err = bandpass_filter(&series, &config).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBand { .. }));
    }

    #[test]
    fn nonpositive_low_rejected() {
        let series = sine_series(100.0, 4096.0, 0.5);
        let config = BandpassConfig::new().with_low_hz(0.0);
        let err = bandpass_filter(&series, &config).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBand { .. }));
    }

    #[test]
    fn band_above_nyquist_rejected() {
        let series = sine_series(100.0, 1024.0, 0.5);
        let config = BandpassConfig::new().with_high_hz(600.0);
        let err = bandpass_filter(&series, &config).unwrap_err();
        assert!(matches!(err, FilterError::Nyquist { .. }));
    }
}
