//! Immutable search result record.

use crate::scan::CorrelationCurve;
use crate::significance::{Classification, Significance};

/// Immutable record of one completed echo search.
///
/// Pure aggregation of the correlation curve and its significance estimate;
/// reporting and plotting collaborators consume this and own all formatting
/// and unit conversion.
#[derive(Clone, Debug)]
pub struct SearchResult {
    curve: CorrelationCurve,
    significance: Significance,
}

impl SearchResult {
    /// Packages a curve and its significance estimate.
    pub fn new(curve: CorrelationCurve, significance: Significance) -> Self {
        debug_assert!(significance.peak_index() < curve.len());
        Self {
            curve,
            significance,
        }
    }

    /// Returns the correlation-versus-delay curve.
    pub fn curve(&self) -> &CorrelationCurve {
        &self.curve
    }

    /// Returns the significance estimate.
    pub fn significance(&self) -> &Significance {
        &self.significance
    }

    /// Returns the delay of the best-matching entry, in seconds.
    pub fn peak_delay(&self) -> f64 {
        self.significance.peak_delay()
    }

    /// Returns the signed correlation of the best-matching entry.
    pub fn peak_correlation(&self) -> f64 {
        self.significance.peak_correlation()
    }

    /// Returns the analytic noise correlation standard deviation.
    pub fn noise_std(&self) -> f64 {
        self.significance.noise_std()
    }

    /// Returns the significance score in σ units.
    pub fn sigma(&self) -> f64 {
        self.significance.sigma()
    }

    /// Returns the reporting band of the score.
    pub fn classification(&self) -> Classification {
        self.significance.classification()
    }
}
