//! Ringdown template extraction.

use tracing::debug;

use oread_strain::StrainSeries;

use crate::error::SearchError;

/// Minimum number of samples a usable template must realize.
pub const MIN_TEMPLATE_SAMPLES: usize = 2;

/// Strategy for locating the merger peak in a strain series.
///
/// The default [`MaxAmplitude`] locator is deliberately crude; implement
/// this trait to substitute a more rigorous estimator (e.g. a
/// matched-filter peak) without touching the delay scanner.
pub trait PeakLocator {
    /// Returns the absolute time of the estimated merger peak.
    fn locate(&self, series: &StrainSeries) -> f64;
}

/// Locates the peak at the sample with maximum absolute strain.
///
/// Peak amplitude is a proxy for the merger time, not a matched-filter
/// estimate: on noisy or glitchy data the loudest sample need not coincide
/// with the merger. Supply an explicit peak time or a different
/// [`PeakLocator`] when that matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxAmplitude;

impl PeakLocator for MaxAmplitude {
    fn locate(&self, series: &StrainSeries) -> f64 {
        let mut peak_index = 0;
        let mut peak_value = f64::NEG_INFINITY;
        for (i, &x) in series.samples().iter().enumerate() {
            if x.abs() > peak_value {
                peak_value = x.abs();
                peak_index = i;
            }
        }
        series.time_at(peak_index)
    }
}

/// Configuration for ringdown template extraction.
#[derive(Clone, Debug)]
pub struct TemplateConfig {
    /// Duration of the template window in seconds.
    window_duration: f64,
    /// Explicit merger peak time (absolute seconds); auto-detected if absent.
    peak_time: Option<f64>,
}

impl TemplateConfig {
    /// Creates a new `TemplateConfig` for the given window duration.
    pub fn new(window_duration: f64) -> Self {
        Self {
            window_duration,
            peak_time: None,
        }
    }

    /// Sets an explicit merger peak time, bypassing auto-detection.
    pub fn with_peak_time(mut self, peak_time: f64) -> Self {
        self.peak_time = Some(peak_time);
        self
    }

    /// Returns the window duration.
    pub fn window_duration(&self) -> f64 {
        self.window_duration
    }

    /// Returns the explicit peak time, if set.
    pub fn peak_time(&self) -> Option<f64> {
        self.peak_time
    }
}

/// The ringdown reference segment used by the delay scanner.
///
/// Holds the extracted strain window together with the merger peak time the
/// window starts at. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Template {
    series: StrainSeries,
    peak_time: f64,
}

impl Template {
    /// Returns the template strain window.
    pub fn series(&self) -> &StrainSeries {
        &self.series
    }

    /// Returns the template samples as a slice.
    pub fn samples(&self) -> &[f64] {
        self.series.samples()
    }

    /// Returns the merger peak time the window starts at.
    pub fn peak_time(&self) -> f64 {
        self.peak_time
    }

    /// Returns the realized template duration, `len / sample_rate`.
    pub fn duration(&self) -> f64 {
        self.series.duration()
    }

    /// Returns the absolute end time of the window.
    pub fn end_time(&self) -> f64 {
        self.series.end_time()
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the template is empty (never, for a valid template).
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Extracts the ringdown template using the default [`MaxAmplitude`] locator.
///
/// See [`extract_template_with`] for details and errors.
pub fn extract_template(
    series: &StrainSeries,
    config: &TemplateConfig,
) -> Result<Template, SearchError> {
    extract_template_with(series, config, &MaxAmplitude)
}

/// Extracts the half-open window `[peak_time, peak_time + window_duration)`
/// as the ringdown template.
///
/// When the config carries no explicit peak time, `locator` estimates it.
/// The input series is not modified.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SearchError::InvalidWindow`] | `window_duration` not finite or <= 0 |
/// | [`SearchError::TemplateTooShort`] | window realizes fewer than 2 samples |
/// | [`SearchError::InsufficientData`] | window extends past the recorded span |
pub fn extract_template_with(
    series: &StrainSeries,
    config: &TemplateConfig,
    locator: &dyn PeakLocator,
) -> Result<Template, SearchError> {
    let duration = config.window_duration();
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SearchError::InvalidWindow { duration });
    }

    let peak_time = match config.peak_time() {
        Some(t) => t,
        None => {
            let t = locator.locate(series);
            debug!(peak_time = t, "auto-detected merger peak");
            t
        }
    };

    let n_samples = (duration * series.sample_rate()).round() as usize;
    if n_samples < MIN_TEMPLATE_SAMPLES {
        return Err(SearchError::TemplateTooShort {
            samples: n_samples,
            min: MIN_TEMPLATE_SAMPLES,
        });
    }

    let window = series.window(peak_time, n_samples)?;
    debug!(
        peak_time,
        n_samples = window.len(),
        duration_ms = window.duration() * 1e3,
        "ringdown template extracted"
    );

    Ok(Template {
        series: window,
        peak_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series_with_peak_at(index: usize, n: usize) -> StrainSeries {
        let samples: Vec<f64> = (0..n)
            .map(|i| if i == index { -5.0 } else { 0.1 * ((i % 7) as f64 - 3.0) })
            .collect();
        StrainSeries::new(samples, 100.0, 50.0).unwrap()
    }

    #[test]
    fn max_amplitude_finds_largest_magnitude() {
        // Largest |x| is negative on purpose
        let series = series_with_peak_at(42, 200);
        let peak = MaxAmplitude.locate(&series);
        assert_relative_eq!(peak, series.time_at(42), epsilon = 1e-12);
    }

    #[test]
    fn max_amplitude_first_occurrence_wins() {
        let samples = vec![0.0, 3.0, -3.0, 1.0];
        let series = StrainSeries::new(samples, 10.0, 0.0).unwrap();
        let peak = MaxAmplitude.locate(&series);
        assert_relative_eq!(peak, series.time_at(1), epsilon = 1e-12);
    }

    #[test]
    fn extract_with_auto_detected_peak() {
        let series = series_with_peak_at(100, 400);
        let config = TemplateConfig::new(0.5);
        let template = extract_template(&series, &config).unwrap();
        assert_relative_eq!(template.peak_time(), series.time_at(100), epsilon = 1e-12);
        assert_eq!(template.len(), 50);
        assert_eq!(template.samples()[0], -5.0);
        assert_relative_eq!(template.duration(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn extract_with_explicit_peak() {
        let series = series_with_peak_at(100, 400);
        let config = TemplateConfig::new(0.5).with_peak_time(51.0);
        let template = extract_template(&series, &config).unwrap();
        assert_relative_eq!(template.peak_time(), 51.0, epsilon = 1e-12);
        // Explicit peak overrides the louder sample at index 100
        assert_eq!(template.samples()[0], series.samples()[100]);
        assert_relative_eq!(template.end_time(), 51.5, epsilon = 1e-12);
    }

    #[test]
    fn extract_window_to_exact_end_succeeds() {
        let series = series_with_peak_at(0, 400);
        // Series spans [50, 54); window [53, 54) reaches the end exactly
        let config = TemplateConfig::new(1.0).with_peak_time(53.0);
        let template = extract_template(&series, &config).unwrap();
        assert_eq!(template.len(), 100);
    }

    #[test]
    fn extract_one_sample_past_end_fails() {
        let series = series_with_peak_at(0, 400);
        let config = TemplateConfig::new(1.0 + 0.01).with_peak_time(53.0);
        let err = extract_template(&series, &config).unwrap_err();
        assert!(matches!(err, SearchError::InsufficientData(_)));
    }

    #[test]
    fn extract_rejects_bad_duration() {
        let series = series_with_peak_at(0, 400);
        for duration in [0.0, -0.1, f64::NAN] {
            let config = TemplateConfig::new(duration).with_peak_time(51.0);
            let err = extract_template(&series, &config).unwrap_err();
            assert!(matches!(err, SearchError::InvalidWindow { .. }), "duration = {duration}");
        }
    }

    #[test]
    fn extract_rejects_subsample_window() {
        let series = series_with_peak_at(0, 400);
        // 1 ms at 100 Hz realizes 0 samples
        let config = TemplateConfig::new(0.001).with_peak_time(51.0);
        let err = extract_template(&series, &config).unwrap_err();
        assert!(matches!(err, SearchError::TemplateTooShort { .. }));
    }

    #[test]
    fn custom_locator_is_used() {
        struct Fixed(f64);
        impl PeakLocator for Fixed {
            fn locate(&self, _series: &StrainSeries) -> f64 {
                self.0
            }
        }

        let series = series_with_peak_at(100, 400);
        let config = TemplateConfig::new(0.5);
        let template = extract_template_with(&series, &config, &Fixed(52.0)).unwrap();
        assert_relative_eq!(template.peak_time(), 52.0, epsilon = 1e-12);
    }

    #[test]
    fn source_series_not_mutated() {
        let series = series_with_peak_at(100, 400);
        let before = series.samples().to_vec();
        let _ = extract_template(&series, &TemplateConfig::new(0.5)).unwrap();
        assert_eq!(series.samples(), &before[..]);
    }
}
