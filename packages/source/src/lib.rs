#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Loading of exported crime incident datasets.
//!
//! The dashboard works on a record set that is read once and then held in
//! memory. This crate reads that record set from the exporter's JSON array
//! or CSV file into [`IncidentRow`] values.

pub mod load;

pub use crime_map_source_models::IncidentRow;
pub use load::{LoadOptions, load_csv, load_json, load_path};

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing failed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported dataset format: {path}")]
    UnsupportedFormat {
        /// Path that was requested.
        path: String,
    },
}
