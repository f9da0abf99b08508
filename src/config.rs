use std::path::PathBuf;

use serde::Deserialize;

/// Top-level oread configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OreadConfig {
    /// Event metadata.
    #[serde(default)]
    pub event: EventToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Band-pass pre-filter settings.
    #[serde(default)]
    pub filter: FilterToml,

    /// Ringdown template settings.
    #[serde(default)]
    pub template: TemplateToml,

    /// Delay search settings.
    #[serde(default)]
    pub search: SearchToml,

    /// Synthetic injection settings.
    #[serde(default)]
    pub inject: InjectToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventToml {
    /// Event name, e.g. "GW150914" (informational).
    pub name: Option<String>,
    /// Detector identifier (opaque to the search).
    #[serde(default = "default_detector")]
    pub detector: String,
}

impl Default for EventToml {
    fn default() -> Self {
        Self {
            name: None,
            detector: default_detector(),
        }
    }
}

fn default_detector() -> String {
    "H1".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Input strain text file.
    pub input: Option<PathBuf>,
    /// Output JSON record path.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_low_hz")]
    pub low_hz: f64,
    #[serde(default = "default_high_hz")]
    pub high_hz: f64,
    #[serde(default = "default_order")]
    pub order: u32,
}

impl Default for FilterToml {
    fn default() -> Self {
        Self {
            enabled: true,
            low_hz: default_low_hz(),
            high_hz: default_high_hz(),
            order: default_order(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_low_hz() -> f64 {
    30.0
}
fn default_high_hz() -> f64 {
    400.0
}
fn default_order() -> u32 {
    4
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateToml {
    /// Ringdown window duration in seconds.
    #[serde(default = "default_window_duration")]
    pub window_duration: f64,
    /// Explicit merger peak time (GPS seconds); auto-detected if absent.
    #[serde(default)]
    pub peak_time: Option<f64>,
}

impl Default for TemplateToml {
    fn default() -> Self {
        Self {
            window_duration: default_window_duration(),
            peak_time: None,
        }
    }
}

fn default_window_duration() -> f64 {
    0.1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    /// Minimum delay in seconds.
    #[serde(default = "default_delay_min")]
    pub delay_min: f64,
    /// Exclusive maximum delay in seconds.
    #[serde(default = "default_delay_max")]
    pub delay_max: f64,
    /// Delay step in seconds.
    #[serde(default = "default_delay_step")]
    pub delay_step: f64,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            delay_min: default_delay_min(),
            delay_max: default_delay_max(),
            delay_step: default_delay_step(),
        }
    }
}

fn default_delay_min() -> f64 {
    0.0001
}
fn default_delay_max() -> f64 {
    0.0012
}
fn default_delay_step() -> f64 {
    0.00001
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectToml {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default = "default_ringdown_onset")]
    pub ringdown_onset: f64,
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,
    #[serde(default = "default_damping_time")]
    pub damping_time: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Absolute echo onset time; no echo is injected if absent.
    #[serde(default)]
    pub echo_onset: Option<f64>,
    #[serde(default = "default_echo_ratio")]
    pub echo_ratio: f64,
    /// Gaussian noise standard deviation; noiseless if absent.
    #[serde(default)]
    pub noise_sigma: Option<f64>,
}

impl Default for InjectToml {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            duration: default_duration(),
            start_time: 0.0,
            ringdown_onset: default_ringdown_onset(),
            frequency_hz: default_frequency_hz(),
            damping_time: default_damping_time(),
            amplitude: default_amplitude(),
            echo_onset: None,
            echo_ratio: default_echo_ratio(),
            noise_sigma: None,
        }
    }
}

fn default_sample_rate() -> f64 {
    4096.0
}
fn default_duration() -> f64 {
    4.0
}
fn default_ringdown_onset() -> f64 {
    2.0
}
fn default_frequency_hz() -> f64 {
    250.0
}
fn default_damping_time() -> f64 {
    0.02
}
fn default_amplitude() -> f64 {
    1e-21
}
fn default_echo_ratio() -> f64 {
    0.3
}
