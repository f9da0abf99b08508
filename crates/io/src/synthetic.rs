//! Synthetic event generation.
//!
//! Builds a strain series containing a damped-sinusoid ringdown, an optional
//! delayed and attenuated echo copy, and optional additive Gaussian noise.
//! Used by the `inject` subcommand and by end-to-end tests; real events come
//! from [`read_strain_txt`](crate::read_strain_txt) instead.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use oread_strain::StrainSeries;

use crate::error::IoError;

/// Parameters of the injected damped-sinusoid ringdown.
#[derive(Clone, Debug)]
pub struct RingdownSpec {
    /// Absolute onset time of the ringdown, seconds.
    onset_time: f64,
    /// Oscillation frequency in Hz.
    frequency_hz: f64,
    /// Exponential damping time in seconds.
    damping_time: f64,
    /// Peak strain amplitude.
    amplitude: f64,
}

impl RingdownSpec {
    /// Creates a ringdown spec with default parameters.
    ///
    /// Defaults: `onset_time = 2.0`, `frequency_hz = 250.0`,
    /// `damping_time = 0.02`, `amplitude = 1e-21`, representative of a
    /// stellar-mass binary merger ringdown.
    pub fn new() -> Self {
        Self {
            onset_time: 2.0,
            frequency_hz: 250.0,
            damping_time: 0.02,
            amplitude: 1e-21,
        }
    }

    /// Sets the absolute onset time.
    pub fn with_onset_time(mut self, onset_time: f64) -> Self {
        self.onset_time = onset_time;
        self
    }

    /// Sets the oscillation frequency.
    pub fn with_frequency_hz(mut self, frequency_hz: f64) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Sets the damping time.
    pub fn with_damping_time(mut self, damping_time: f64) -> Self {
        self.damping_time = damping_time;
        self
    }

    /// Sets the peak amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Returns the absolute onset time.
    pub fn onset_time(&self) -> f64 {
        self.onset_time
    }

    /// Returns the oscillation frequency.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Returns the damping time.
    pub fn damping_time(&self) -> f64 {
        self.damping_time
    }

    /// Returns the peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Evaluates the waveform at `dt` seconds after onset (0 before onset).
    fn waveform(&self, dt: f64) -> f64 {
        if dt < 0.0 {
            return 0.0;
        }
        self.amplitude
            * (-dt / self.damping_time).exp()
            * (2.0 * std::f64::consts::PI * self.frequency_hz * dt).sin()
    }
}

impl Default for RingdownSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the injected echo copy.
#[derive(Clone, Debug)]
pub struct EchoSpec {
    /// Absolute onset time of the echo, seconds.
    onset_time: f64,
    /// Echo amplitude as a fraction of the ringdown amplitude.
    amplitude_ratio: f64,
}

impl EchoSpec {
    /// Creates an echo spec at the given absolute onset time.
    ///
    /// Default `amplitude_ratio = 0.3`.
    pub fn new(onset_time: f64) -> Self {
        Self {
            onset_time,
            amplitude_ratio: 0.3,
        }
    }

    /// Sets the amplitude ratio.
    pub fn with_amplitude_ratio(mut self, amplitude_ratio: f64) -> Self {
        self.amplitude_ratio = amplitude_ratio;
        self
    }

    /// Returns the absolute onset time.
    pub fn onset_time(&self) -> f64 {
        self.onset_time
    }

    /// Returns the amplitude ratio.
    pub fn amplitude_ratio(&self) -> f64 {
        self.amplitude_ratio
    }
}

/// Configuration for synthetic event generation.
#[derive(Clone, Debug)]
pub struct InjectionConfig {
    /// Sample rate in Hz.
    sample_rate: f64,
    /// Total duration in seconds.
    duration: f64,
    /// Absolute start time of the series.
    start_time: f64,
    /// Ringdown parameters.
    ringdown: RingdownSpec,
    /// Optional echo copy.
    echo: Option<EchoSpec>,
    /// Optional Gaussian noise standard deviation.
    noise_sigma: Option<f64>,
}

impl InjectionConfig {
    /// Creates an injection config with default parameters.
    ///
    /// Defaults: `sample_rate = 4096.0`, `duration = 4.0`,
    /// `start_time = 0.0`, default ringdown, no echo, no noise.
    pub fn new() -> Self {
        Self {
            sample_rate: 4096.0,
            duration: 4.0,
            start_time: 0.0,
            ringdown: RingdownSpec::new(),
            echo: None,
            noise_sigma: None,
        }
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the total duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the absolute start time.
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the ringdown parameters.
    pub fn with_ringdown(mut self, ringdown: RingdownSpec) -> Self {
        self.ringdown = ringdown;
        self
    }

    /// Sets the echo copy.
    pub fn with_echo(mut self, echo: EchoSpec) -> Self {
        self.echo = Some(echo);
        self
    }

    /// Sets the Gaussian noise standard deviation.
    pub fn with_noise_sigma(mut self, noise_sigma: f64) -> Self {
        self.noise_sigma = Some(noise_sigma);
        self
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns the total duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the absolute start time.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Returns the ringdown parameters.
    pub fn ringdown(&self) -> &RingdownSpec {
        &self.ringdown
    }

    /// Returns the echo copy, if any.
    pub fn echo(&self) -> Option<&EchoSpec> {
        self.echo.as_ref()
    }

    /// Returns the noise standard deviation, if any.
    pub fn noise_sigma(&self) -> Option<f64> {
        self.noise_sigma
    }

    fn validate(&self) -> Result<(), IoError> {
        let fail = |reason: String| Err(IoError::InvalidInjection { reason });
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return fail(format!("sample_rate must be > 0, got {}", self.sample_rate));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return fail(format!("duration must be > 0, got {}", self.duration));
        }
        if !self.start_time.is_finite() {
            return fail(format!("start_time must be finite, got {}", self.start_time));
        }
        let r = &self.ringdown;
        if !r.frequency_hz.is_finite() || r.frequency_hz <= 0.0 {
            return fail(format!("frequency must be > 0 Hz, got {}", r.frequency_hz));
        }
        if !r.damping_time.is_finite() || r.damping_time <= 0.0 {
            return fail(format!("damping time must be > 0 s, got {}", r.damping_time));
        }
        if !r.amplitude.is_finite() || !r.onset_time.is_finite() {
            return fail("ringdown amplitude and onset must be finite".to_string());
        }
        if let Some(e) = &self.echo {
            if !e.onset_time.is_finite() {
                return fail(format!("echo onset must be finite, got {}", e.onset_time));
            }
            if !e.amplitude_ratio.is_finite() || e.amplitude_ratio < 0.0 {
                return fail(format!(
                    "echo amplitude ratio must be >= 0, got {}",
                    e.amplitude_ratio
                ));
            }
        }
        if let Some(sigma) = self.noise_sigma {
            if !sigma.is_finite() || sigma < 0.0 {
                return fail(format!("noise sigma must be >= 0, got {sigma}"));
            }
        }
        Ok(())
    }
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a synthetic strain series from the injection config.
///
/// The ringdown (and echo, when present) are evaluated at each sample time;
/// Gaussian noise is drawn from `rng` only when a positive `noise_sigma` is
/// configured, so noiseless generation is independent of the RNG state.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::InvalidInjection`] | inconsistent parameters (see [`InjectionConfig`]) |
/// | [`IoError::Strain`] | realized series fails validation (e.g. < 2 samples) |
pub fn synthesize_event<R: Rng + ?Sized>(
    config: &InjectionConfig,
    rng: &mut R,
) -> Result<StrainSeries, IoError> {
    config.validate()?;

    let n = (config.duration * config.sample_rate).round() as usize;
    let ringdown = config.ringdown();
    let mut samples: Vec<f64> = (0..n)
        .map(|k| {
            let t = config.start_time + k as f64 / config.sample_rate;
            let mut x = ringdown.waveform(t - ringdown.onset_time());
            if let Some(echo) = config.echo() {
                x += echo.amplitude_ratio() * ringdown.waveform(t - echo.onset_time());
            }
            x
        })
        .collect();

    if let Some(sigma) = config.noise_sigma()
        && sigma > 0.0
    {
        let normal = Normal::new(0.0, sigma).map_err(|e| IoError::InvalidInjection {
            reason: e.to_string(),
        })?;
        for x in &mut samples {
            *x += normal.sample(rng);
        }
    }

    debug!(
        n_samples = n,
        with_echo = config.echo().is_some(),
        with_noise = config.noise_sigma().is_some_and(|s| s > 0.0),
        "synthetic event generated"
    );

    Ok(StrainSeries::new(
        samples,
        config.sample_rate,
        config.start_time,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn noiseless_event_shape() {
        let config = InjectionConfig::new()
            .with_sample_rate(1024.0)
            .with_duration(4.0);
        let mut rng = StdRng::seed_from_u64(0);
        let series = synthesize_event(&config, &mut rng).unwrap();

        assert_eq!(series.len(), 4096);
        assert_eq!(series.sample_rate(), 1024.0);
        // Silence before onset, signal after
        let onset_index = series.index_at(2.0) as usize;
        assert!(series.samples()[..onset_index].iter().all(|&x| x == 0.0));
        let peak = series.samples()[onset_index..]
            .iter()
            .fold(0.0_f64, |m, &x| m.max(x.abs()));
        assert!(peak > 0.5e-21, "ringdown peak {peak} unexpectedly small");
    }

    #[test]
    fn waveform_decays() {
        let spec = RingdownSpec::new();
        let early = spec.waveform(0.001).abs();
        let late = spec.waveform(0.1).abs();
        assert!(late < early);
        assert_eq!(spec.waveform(-0.5), 0.0);
    }

    #[test]
    fn echo_adds_scaled_copy() {
        let config = InjectionConfig::new()
            .with_sample_rate(1024.0)
            .with_duration(4.0)
            .with_echo(EchoSpec::new(2.5).with_amplitude_ratio(0.3));
        let mut rng = StdRng::seed_from_u64(0);
        let series = synthesize_event(&config, &mut rng).unwrap();

        // At t >= 2.5 the ringdown (tau = 0.02 s) has decayed to nothing,
        // so the samples there are the scaled echo alone.
        let echo_index = series.index_at(2.5) as usize;
        let base = InjectionConfig::new()
            .with_sample_rate(1024.0)
            .with_duration(4.0);
        let plain = synthesize_event(&base, &mut rng).unwrap();
        let onset_index = plain.index_at(2.0) as usize;

        for k in 0..100 {
            assert_relative_eq!(
                series.samples()[echo_index + k],
                0.3 * plain.samples()[onset_index + k],
                epsilon = 1e-30,
                max_relative = 1e-6,
            );
        }
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let config = InjectionConfig::new()
            .with_sample_rate(512.0)
            .with_duration(1.0)
            .with_noise_sigma(1e-22);
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = synthesize_event(&config, &mut rng_a).unwrap();
        let b = synthesize_event(&config, &mut rng_b).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn zero_sigma_adds_no_noise() {
        let noisy = InjectionConfig::new()
            .with_sample_rate(512.0)
            .with_duration(1.0)
            .with_noise_sigma(0.0);
        let clean = InjectionConfig::new()
            .with_sample_rate(512.0)
            .with_duration(1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let a = synthesize_event(&noisy, &mut rng).unwrap();
        let b = synthesize_event(&clean, &mut rng).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn invalid_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad_rate = InjectionConfig::new().with_sample_rate(0.0);
        assert!(matches!(
            synthesize_event(&bad_rate, &mut rng),
            Err(IoError::InvalidInjection { .. })
        ));

        let bad_duration = InjectionConfig::new().with_duration(-1.0);
        assert!(matches!(
            synthesize_event(&bad_duration, &mut rng),
            Err(IoError::InvalidInjection { .. })
        ));

        let bad_sigma = InjectionConfig::new().with_noise_sigma(-1.0);
        assert!(matches!(
            synthesize_event(&bad_sigma, &mut rng),
            Err(IoError::InvalidInjection { .. })
        ));

        let bad_ratio = InjectionConfig::new()
            .with_echo(EchoSpec::new(2.1).with_amplitude_ratio(f64::NAN));
        assert!(matches!(
            synthesize_event(&bad_ratio, &mut rng),
            Err(IoError::InvalidInjection { .. })
        ));
    }
}
