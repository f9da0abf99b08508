//! Significance scoring of the correlation peak.
//!
//! The peak correlation is expressed in units of the analytic standard
//! deviation of the Pearson coefficient between two independent unit-variance
//! Gaussian noise vectors of the template's length, `1 / sqrt(L)`. This is a
//! first-order approximation: it ignores the non-Gaussian, non-stationary
//! artifacts of real detector noise and finite-sample bias. It is kept
//! exactly in this form for output compatibility; do not substitute an
//! empirical estimate.

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;
use std::fmt;

use crate::error::SearchError;
use crate::scan::CorrelationCurve;
use crate::template::MIN_TEMPLATE_SAMPLES;

/// Significance above which a peak is reported as a strong candidate.
pub const STRONG_CANDIDATE_SIGMA: f64 = 5.0;

/// Significance above which a peak is reported as marginal.
pub const MARGINAL_SIGMA: f64 = 3.0;

/// Reporting band for a significance score.
///
/// The thresholds are fixed constants relied upon by downstream reporting,
/// not configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// `significance > 5`.
    StrongCandidate,
    /// `3 < significance <= 5`.
    Marginal,
    /// Everything else.
    NotSignificant,
}

impl Classification {
    /// Classifies a significance score into its reporting band.
    pub fn from_sigma(sigma: f64) -> Self {
        if sigma > STRONG_CANDIDATE_SIGMA {
            Classification::StrongCandidate
        } else if sigma > MARGINAL_SIGMA {
            Classification::Marginal
        } else {
            Classification::NotSignificant
        }
    }

    /// Returns the fixed reporting label.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::StrongCandidate => "strong candidate",
            Classification::Marginal => "marginal",
            Classification::NotSignificant => "not significant",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Significance estimate for the best-matching delay of a correlation curve.
#[derive(Clone, Debug)]
pub struct Significance {
    /// Grid index of the peak entry.
    peak_index: usize,
    /// Delay of the peak entry, seconds.
    peak_delay: f64,
    /// Signed correlation at the peak.
    peak_correlation: f64,
    /// Analytic noise correlation scale, `1 / sqrt(template_len)`.
    noise_std: f64,
    /// `|peak_correlation| / noise_std`.
    sigma: f64,
}

impl Significance {
    /// Returns the grid index of the peak entry.
    pub fn peak_index(&self) -> usize {
        self.peak_index
    }

    /// Returns the delay of the peak entry, in seconds.
    pub fn peak_delay(&self) -> f64 {
        self.peak_delay
    }

    /// Returns the signed correlation at the peak.
    pub fn peak_correlation(&self) -> f64 {
        self.peak_correlation
    }

    /// Returns the analytic noise correlation standard deviation.
    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    /// Returns the significance score in σ units.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the reporting band of the score.
    pub fn classification(&self) -> Classification {
        Classification::from_sigma(self.sigma)
    }

    /// Two-sided Gaussian tail probability of the score.
    ///
    /// A presentation convenience derived from `sigma` under the same
    /// independence assumption; it never feeds back into the score.
    pub fn p_value(&self) -> f64 {
        erfc(self.sigma / SQRT_2)
    }
}

/// Estimates the significance of the correlation peak.
///
/// The peak is the entry with the largest `|correlation|`; ties resolve to
/// the earliest delay. `template_len` is the sample count of the template
/// the curve was scanned with.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SearchError::EmptyCurve`] | the curve holds no entries |
/// | [`SearchError::TemplateTooShort`] | `template_len < 2` |
pub fn estimate_significance(
    curve: &CorrelationCurve,
    template_len: usize,
) -> Result<Significance, SearchError> {
    if curve.is_empty() {
        return Err(SearchError::EmptyCurve);
    }
    if template_len < MIN_TEMPLATE_SAMPLES {
        return Err(SearchError::TemplateTooShort {
            samples: template_len,
            min: MIN_TEMPLATE_SAMPLES,
        });
    }

    // Strict > keeps the first occurrence on ties, so trailing zero-padded
    // entries can never claim the peak.
    let mut peak_index = 0;
    let mut peak_abs = f64::NEG_INFINITY;
    for (i, &r) in curve.correlations().iter().enumerate() {
        if r.abs() > peak_abs {
            peak_abs = r.abs();
            peak_index = i;
        }
    }

    let peak_delay = curve.delays()[peak_index];
    let peak_correlation = curve.correlations()[peak_index];
    let noise_std = 1.0 / (template_len as f64).sqrt();
    let sigma = peak_correlation.abs() / noise_std;

    Ok(Significance {
        peak_index,
        peak_delay,
        peak_correlation,
        noise_std,
        sigma,
    })
}
