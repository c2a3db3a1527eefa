#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filtering of the in-memory incident set.
//!
//! [`engine`] holds the pure row predicate, [`store`] owns the current filter
//! snapshot and notifies subscribers when it is replaced, and [`view`] caches
//! the filtered rows for a snapshot so consumers only recompute when the
//! snapshot actually changes.

pub mod engine;
pub mod store;
pub mod view;

use std::str::FromStr;

use crime_map_filter_models::{ALL, InvalidDateError};
use thiserror::Error;

pub use engine::{apply_filters, matches};
pub use store::{FilterStore, SubscriptionId};
pub use view::FilteredView;

/// Errors that can occur while building filter updates from user input.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A date bound was not a `YYYY-MM-DD` date.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    /// A selector value is not part of the field's domain.
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue {
        /// Filter field being set.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Parses a selector value where `"ALL"` (or an empty string) means no
/// constraint.
///
/// # Errors
///
/// Returns [`FilterError::InvalidValue`] if `value` does not parse as `T`.
pub fn parse_selector<T: FromStr>(field: &'static str, value: &str) -> Result<Option<T>, FilterError> {
    let value = value.trim();
    if value.is_empty() || value == ALL {
        return Ok(None);
    }

    value.parse().map(Some).map_err(|_| FilterError::InvalidValue {
        field,
        value: value.to_string(),
    })
}
