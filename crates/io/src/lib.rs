//! # oread-io
//!
//! File I/O and synthetic data for the oread echo search: the plain-text
//! strain format (reader and writer), JSON persistence of search records,
//! and a synthetic event generator for injections and end-to-end tests.
//!
//! The search core never touches the filesystem; everything here is a
//! caller-side collaborator.

mod error;
mod reader;
mod synthetic;
mod writer;

pub use error::IoError;
pub use reader::{HEADER_SAMPLE_RATE, HEADER_START_TIME, read_strain_txt};
pub use synthetic::{EchoSpec, InjectionConfig, RingdownSpec, synthesize_event};
pub use writer::{
    CurvePoint, GridSummary, SearchRecord, TemplateSummary, to_json, write_search_json,
    write_strain_txt,
};
