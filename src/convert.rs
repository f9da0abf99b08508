//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use oread_filter::BandpassConfig;
use oread_io::{EchoSpec, InjectionConfig, RingdownSpec};
use oread_search::{DelayGrid, TemplateConfig};

use crate::config::{FilterToml, InjectToml, SearchToml, TemplateToml};

/// Builds a [`BandpassConfig`] from the TOML filter configuration.
pub fn build_bandpass_config(filter: &FilterToml) -> BandpassConfig {
    BandpassConfig::new()
        .with_low_hz(filter.low_hz)
        .with_high_hz(filter.high_hz)
        .with_order(filter.order)
}

/// Builds a [`TemplateConfig`], letting an explicit CLI peak time override
/// the config file.
pub fn build_template_config(template: &TemplateToml, cli_peak: Option<f64>) -> TemplateConfig {
    let mut config = TemplateConfig::new(template.window_duration);
    if let Some(peak) = cli_peak.or(template.peak_time) {
        config = config.with_peak_time(peak);
    }
    config
}

/// Builds a validated [`DelayGrid`] from the TOML search configuration.
pub fn build_delay_grid(search: &SearchToml) -> Result<DelayGrid> {
    DelayGrid::new(search.delay_min, search.delay_max, search.delay_step)
        .context("invalid [search] delay grid")
}

/// Builds an [`InjectionConfig`] from the TOML injection configuration.
pub fn build_injection_config(inject: &InjectToml) -> InjectionConfig {
    let ringdown = RingdownSpec::new()
        .with_onset_time(inject.ringdown_onset)
        .with_frequency_hz(inject.frequency_hz)
        .with_damping_time(inject.damping_time)
        .with_amplitude(inject.amplitude);

    let mut config = InjectionConfig::new()
        .with_sample_rate(inject.sample_rate)
        .with_duration(inject.duration)
        .with_start_time(inject.start_time)
        .with_ringdown(ringdown);

    if let Some(echo_onset) = inject.echo_onset {
        config = config.with_echo(EchoSpec::new(echo_onset).with_amplitude_ratio(inject.echo_ratio));
    }
    if let Some(sigma) = inject.noise_sigma {
        config = config.with_noise_sigma(sigma);
    }
    config
}
