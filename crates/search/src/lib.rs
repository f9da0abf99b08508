//! # oread-search
//!
//! Delay-scan cross-correlation search for gravitational-wave ringdown
//! echoes.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["StrainSeries"] -->|"extract_template(&series, &config)?"| B["Template"]
//!     A -->|"scan(&series, &template, &grid)?"| C["CorrelationCurve"]
//!     B --> C
//!     C -->|"estimate_significance(&curve, len)?"| D["Significance"]
//!     C --> E["SearchResult"]
//!     D --> E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use oread_search::{DelayGrid, SearchConfig, TemplateConfig, run_search};
//!
//! let config = SearchConfig::new(
//!     TemplateConfig::new(0.1),
//!     DelayGrid::new(0.0001, 0.0012, 0.00001)?,
//! );
//! let result = run_search(&series, &config)?;
//! println!("{:.2} σ at {:.3} ms", result.sigma(), result.peak_delay() * 1e3);
//! ```
//!
//! The search is a pure computation: it reads the series and returns a
//! value, with no ambient state, no retries, and no I/O. The only degraded
//! path is running out of data mid-scan, which zero-pads the tail of the
//! curve instead of failing (see [`scan`]).

mod error;
mod grid;
mod result;
mod scan;
mod significance;
mod template;

pub use error::SearchError;
pub use grid::DelayGrid;
pub use result::SearchResult;
pub use scan::{CorrelationCurve, scan};
pub use significance::{
    Classification, MARGINAL_SIGMA, STRONG_CANDIDATE_SIGMA, Significance, estimate_significance,
};
pub use template::{
    MIN_TEMPLATE_SAMPLES, MaxAmplitude, PeakLocator, Template, TemplateConfig, extract_template,
    extract_template_with,
};

use oread_strain::StrainSeries;

/// Configuration for a full echo search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Template extraction parameters.
    template: TemplateConfig,
    /// Delay grid to scan.
    grid: DelayGrid,
}

impl SearchConfig {
    /// Creates a new `SearchConfig`.
    pub fn new(template: TemplateConfig, grid: DelayGrid) -> Self {
        Self { template, grid }
    }

    /// Returns the template extraction parameters.
    pub fn template(&self) -> &TemplateConfig {
        &self.template
    }

    /// Returns the delay grid.
    pub fn grid(&self) -> &DelayGrid {
        &self.grid
    }
}

/// Runs the full search: template extraction, delay scan, significance.
///
/// Expects an already-conditioned (band-limited) series; this crate applies
/// no filtering of its own.
///
/// # Errors
///
/// Propagates the first error of any stage; see [`extract_template`],
/// [`scan`] and [`estimate_significance`]. Errors are terminal; a partial
/// [`SearchResult`] is never produced.
pub fn run_search(
    series: &StrainSeries,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let template = extract_template(series, config.template())?;
    let curve = scan(series, &template, config.grid())?;
    let significance = estimate_significance(&curve, template.len())?;
    Ok(SearchResult::new(curve, significance))
}
