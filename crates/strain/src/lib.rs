//! # oread-strain
//!
//! Validated, immutable container for uniformly sampled gravitational-wave
//! strain data.
//!
//! A [`StrainSeries`] couples the sample vector with its sample rate and an
//! absolute start time (GPS seconds by convention) and guarantees finite,
//! uniformly spaced data. Sub-ranging by absolute time ([`StrainSeries::crop`],
//! [`StrainSeries::window`]) always produces a new series and never mutates
//! the source.

mod error;
mod series;

pub use error::StrainError;
pub use series::{MIN_SAMPLES, StrainSeries};
