#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The crime incident record as exported by the source dataset.
//!
//! Rows are denormalized: calendar fields (weekday, month, day period) are
//! precomputed by the exporter and stored next to the raw date string.
//! Field names on the wire follow the dataset's Spanish column headers.

use serde::{Deserialize, Serialize};

/// A numeric column that the exporter may emit either as a number or as a
/// string (sometimes empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Already numeric.
    Number(f64),
    /// Text that may or may not parse as a number.
    Text(String),
    /// Null or absent.
    #[default]
    Missing,
}

impl RawNumber {
    /// Returns the finite numeric value, or `None` when the value is empty,
    /// unparseable, or not finite.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Missing => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One observed crime incident.
///
/// Rows are never modified after loading; every filtered or aggregated view
/// is computed from them afresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentRow {
    /// Latitude (WGS84). May be unparseable.
    #[serde(rename = "Latitud", default)]
    pub latitude: RawNumber,
    /// Longitude (WGS84). May be unparseable.
    #[serde(rename = "Longitud", default)]
    pub longitude: RawNumber,
    /// Date as `YYYY-MM-DD`, possibly followed by a time component.
    #[serde(rename = "Fecha", default)]
    pub date: String,
    /// Free-text time of day, display only.
    #[serde(rename = "Hora", default)]
    pub time: String,
    /// Fine-grained type, possibly misspelled.
    #[serde(rename = "Tipo_Crimen", default)]
    pub crime_type: String,
    /// Coarse category (e.g. `"ROBO ARMADO"`).
    #[serde(rename = "Categoria_Crimen", default)]
    pub crime_category: String,
    /// Localized time-of-day period (e.g. `"Noche"`).
    #[serde(rename = "Periodo_Dia", default)]
    pub day_period: String,
    /// English weekday name (e.g. `"Wednesday"`).
    #[serde(rename = "Nombre_Dia", default)]
    pub weekday_name: String,
    /// English month name (e.g. `"May"`).
    #[serde(rename = "Nombre_Mes", default)]
    pub month_name: String,
    /// Minutes since midnight.
    #[serde(rename = "Minutos_Dia", default)]
    pub minutes_of_day: RawNumber,
}

impl IncidentRow {
    /// Returns `(latitude, longitude)` when both coordinates parse.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude.as_f64()?, self.longitude.as_f64()?))
    }

    /// Year segment of the date: everything before the first `-`.
    ///
    /// Empty when the date is empty.
    #[must_use]
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or_default()
    }
}
