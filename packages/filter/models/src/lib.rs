#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter state for the dashboard.
//!
//! A [`FilterState`] is a set of independent, optional constraints. It is
//! never edited in place: every change goes through [`FilterState::with`],
//! which returns a new value, so holders of the previous value can tell a
//! change happened by comparing references.

use chrono::NaiveDate;
use crime_map_crime_models::{CrimeCategory, CrimeType, DayPeriod, Month, Weekday};
use serde::{Deserialize, Serialize};

/// Wire value meaning "no constraint" for the optional selector fields.
pub const ALL: &str = "ALL";

/// Date format accepted for the `date_from`/`date_to` bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The current set of user-selected constraints.
///
/// `None` (or an empty date bound) means the field does not constrain the
/// result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Exact top-level category.
    #[serde(with = "all_sentinel")]
    pub category: Option<CrimeCategory>,
    /// Canonical type, compared against the normalized row type.
    #[serde(rename = "type", with = "all_sentinel")]
    pub crime_type: Option<CrimeType>,
    #[serde(with = "all_sentinel")]
    pub weekday: Option<Weekday>,
    #[serde(with = "all_sentinel")]
    pub day_period: Option<DayPeriod>,
    /// Four-digit year as it appears at the start of the row date.
    #[serde(with = "all_sentinel")]
    pub year: Option<String>,
    #[serde(with = "all_sentinel")]
    pub month: Option<Month>,
    /// Inclusive lower date bound (`YYYY-MM-DD`), empty for unbounded.
    pub date_from: String,
    /// Inclusive upper date bound (`YYYY-MM-DD`), empty for unbounded.
    pub date_to: String,
}

impl FilterState {
    /// Returns a copy of this state with `update` applied.
    ///
    /// Selecting a different category clears the type constraint, since a
    /// type is only meaningful within its category's membership list.
    #[must_use]
    pub fn with(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Category(category) => {
                if category != self.category {
                    next.crime_type = None;
                }
                next.category = category;
            }
            FilterUpdate::CrimeType(crime_type) => next.crime_type = crime_type,
            FilterUpdate::Weekday(weekday) => next.weekday = weekday,
            FilterUpdate::DayPeriod(day_period) => next.day_period = day_period,
            FilterUpdate::Year(year) => next.year = year,
            FilterUpdate::Month(month) => next.month = month,
            FilterUpdate::DateFrom(date) => next.date_from = date,
            FilterUpdate::DateTo(date) => next.date_to = date,
        }
        next
    }

    /// Whether no field constrains the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether any constraint depends on the row date (year or date range).
    #[must_use]
    pub fn has_date_constraint(&self) -> bool {
        self.year.is_some() || !self.date_from.is_empty() || !self.date_to.is_empty()
    }
}

/// A change to a single field of a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Category(Option<CrimeCategory>),
    CrimeType(Option<CrimeType>),
    Weekday(Option<Weekday>),
    DayPeriod(Option<DayPeriod>),
    Year(Option<String>),
    Month(Option<Month>),
    DateFrom(String),
    DateTo(String),
}

impl FilterUpdate {
    /// Builds a lower date bound update, validating the date.
    ///
    /// An empty string clears the bound.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if `value` is neither empty nor a
    /// `YYYY-MM-DD` date.
    pub fn date_from(value: &str) -> Result<Self, InvalidDateError> {
        validate_date(value).map(Self::DateFrom)
    }

    /// Builds an upper date bound update, validating the date.
    ///
    /// An empty string clears the bound.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if `value` is neither empty nor a
    /// `YYYY-MM-DD` date.
    pub fn date_to(value: &str) -> Result<Self, InvalidDateError> {
        validate_date(value).map(Self::DateTo)
    }
}

fn validate_date(value: &str) -> Result<String, InvalidDateError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| InvalidDateError {
            value: value.to_string(),
        })
}

/// Error returned when a date bound is not a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateError {
    /// The rejected input.
    pub value: String,
}

impl std::fmt::Display for InvalidDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date '{}': expected YYYY-MM-DD", self.value)
    }
}

impl std::error::Error for InvalidDateError {}

/// Serializes `None` as [`ALL`] and everything else by its string form.
mod all_sentinel {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::ALL;

    #[allow(clippy::ref_option)]
    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<str>,
    {
        serializer.serialize_str(value.as_ref().map_or(ALL, |v| v.as_ref()))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == ALL {
            return Ok(None);
        }
        raw.parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid value '{raw}': {e}")))
    }
}
