//! Delay-scan cross-correlation: the algorithmic heart of the search.

use rayon::prelude::*;
use tracing::debug;

use oread_strain::{StrainError, StrainSeries};

use crate::error::SearchError;
use crate::grid::DelayGrid;
use crate::template::Template;

/// Correlation-versus-delay curve produced by [`scan`].
///
/// Parallel vectors of equal length, in ascending delay order. Delays past
/// the end of the recorded data carry a correlation of exactly `0.0` (see
/// [`scan`]); the curve length always equals the grid cardinality.
#[derive(Clone, Debug)]
pub struct CorrelationCurve {
    delays: Vec<f64>,
    correlations: Vec<f64>,
}

impl CorrelationCurve {
    pub(crate) fn new(delays: Vec<f64>, correlations: Vec<f64>) -> Self {
        debug_assert_eq!(delays.len(), correlations.len());
        Self {
            delays,
            correlations,
        }
    }

    /// Returns the delays in ascending order.
    pub fn delays(&self) -> &[f64] {
        &self.delays
    }

    /// Returns the Pearson correlation at each delay.
    pub fn correlations(&self) -> &[f64] {
        &self.correlations
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    /// Returns `true` if the curve holds no entries.
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Iterates `(delay, correlation)` pairs in ascending delay order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.delays
            .iter()
            .copied()
            .zip(self.correlations.iter().copied())
    }
}

/// Scans the delay grid for echoes of the template.
///
/// For each delay `d` (ascending), extracts the comparison window starting
/// at `template.end_time() + d` with the template's sample count, divides
/// template and window each by their own sample standard deviation (scale
/// normalization only; no mean subtraction at this step), and records the
/// Pearson correlation of the two normalized segments.
///
/// Delays whose comparison window would extend past the end of the recorded
/// data record a correlation of exactly `0.0`. This is a degraded-completion
/// policy, not an error: no more data can appear mid-run, and the curve
/// must keep the full grid length. Because the delays ascend, every delay
/// after the first exhausted one is exhausted too, so the zero entries
/// always form a trailing run.
///
/// Delays are evaluated in parallel; results land in pre-sized slots keyed
/// by grid index, so the output order (and every bit of it) is identical to
/// a sequential scan.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SearchError::DegenerateTemplate`] | template has zero variance |
/// | [`SearchError::DegenerateSegment`] | an in-range comparison window has zero variance |
/// | [`SearchError::InsufficientData`] | a comparison window starts before the recorded span |
pub fn scan(
    series: &StrainSeries,
    template: &Template,
    grid: &DelayGrid,
) -> Result<CorrelationCurve, SearchError> {
    let template_sd = oread_stats::sd(template.samples());
    if template_sd == 0.0 {
        return Err(SearchError::DegenerateTemplate);
    }
    let template_norm: Vec<f64> = template.samples().iter().map(|x| x / template_sd).collect();

    let search_origin = template.end_time();
    let delays = grid.delays();

    let correlations: Vec<f64> = delays
        .par_iter()
        .map(|&delay| correlate_at(series, &template_norm, search_origin + delay, delay))
        .collect::<Result<Vec<_>, _>>()?;

    let n_exhausted = correlations.iter().rev().take_while(|&&r| r == 0.0).count();
    debug!(
        n_delays = delays.len(),
        n_exhausted,
        "delay scan complete"
    );

    Ok(CorrelationCurve::new(delays, correlations))
}

/// Correlates one comparison window against the normalized template.
///
/// Returns `Ok(0.0)` when the window runs past the end of the data (the
/// zero-padding policy above).
fn correlate_at(
    series: &StrainSeries,
    template_norm: &[f64],
    window_start: f64,
    delay: f64,
) -> Result<f64, SearchError> {
    let n_samples = template_norm.len();
    let i0 = series.index_at(window_start);
    if i0 < 0 {
        return Err(SearchError::InsufficientData(StrainError::WindowOutOfRange {
            start: window_start,
            end: window_start + n_samples as f64 / series.sample_rate(),
            available_start: series.start_time(),
            available_end: series.end_time(),
        }));
    }
    let i0 = i0 as usize;
    if i0 + n_samples > series.len() {
        // Data exhausted: degraded result, not a failure.
        return Ok(0.0);
    }

    let segment = &series.samples()[i0..i0 + n_samples];
    let segment_sd = oread_stats::sd(segment);
    if segment_sd == 0.0 {
        return Err(SearchError::DegenerateSegment { delay_s: delay });
    }
    let segment_norm: Vec<f64> = segment.iter().map(|x| x / segment_sd).collect();

    oread_stats::pearson_correlation(template_norm, &segment_norm)
        .ok_or(SearchError::DegenerateSegment { delay_s: delay })
}
