//! Strain file and search record writers.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use oread_strain::StrainSeries;

use crate::error::IoError;
use crate::reader::{HEADER_SAMPLE_RATE, HEADER_START_TIME};

/// Writes a strain series in the plain-text format read by
/// [`read_strain_txt`](crate::read_strain_txt).
///
/// Samples are written with Rust's shortest round-trip float formatting, so
/// a write/read cycle reproduces the series bit-exactly.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be written.
pub fn write_strain_txt(path: &Path, series: &StrainSeries) -> Result<(), IoError> {
    let mut out = String::new();
    let _ = writeln!(out, "# {HEADER_START_TIME}: {}", series.start_time());
    let _ = writeln!(out, "# {HEADER_SAMPLE_RATE}: {}", series.sample_rate());
    for &x in series.samples() {
        let _ = writeln!(out, "{x:e}");
    }
    fs::write(path, out)?;
    info!(
        path = %path.display(),
        n_samples = series.len(),
        "strain data written"
    );
    Ok(())
}

/// One `(delay, correlation)` point of the scanned curve.
#[derive(Debug, Clone, Serialize)]
pub struct CurvePoint {
    pub delay_s: f64,
    pub correlation: f64,
}

/// Summary of the delay grid that was scanned.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub delay_min_s: f64,
    pub delay_max_s: f64,
    pub delay_step_s: f64,
    pub n_delays: usize,
}

/// Summary of the ringdown template used for matching.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub peak_time: f64,
    pub duration_s: f64,
    pub n_samples: usize,
}

/// Serializable record of one completed echo search.
///
/// Flat data-holder assembled by the caller from a search result; the core
/// crates know nothing about persistence.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRecord {
    /// Event name, if known (e.g. "GW150914").
    pub event: Option<String>,
    /// Detector identifier, if known (opaque to the search).
    pub detector: Option<String>,
    pub grid: GridSummary,
    pub template: TemplateSummary,
    pub peak_delay_s: f64,
    pub peak_correlation: f64,
    pub noise_std: f64,
    pub significance: f64,
    pub classification: String,
    pub p_value: f64,
    pub curve: Vec<CurvePoint>,
}

/// Serializes a search record to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if JSON encoding fails.
pub fn to_json(record: &SearchRecord) -> Result<String, IoError> {
    serde_json::to_string_pretty(record).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes a search record as JSON.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] on encoding failure or
/// [`IoError::Io`] if the file cannot be written.
pub fn write_search_json(path: &Path, record: &SearchRecord) -> Result<(), IoError> {
    let json = to_json(record)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "search record written");
    Ok(())
}
