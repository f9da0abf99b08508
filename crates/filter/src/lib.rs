//! # oread-filter
//!
//! Band-limiting pre-filter for strain conditioning.
//!
//! The echo search core works on any already-conditioned buffer; this crate
//! is the caller-side collaborator that restricts the strain to the ringdown
//! frequency band (30–400 Hz by default) before template extraction.

mod bandpass;
mod error;

pub use bandpass::{BandpassConfig, bandpass_filter};
pub use error::FilterError;
