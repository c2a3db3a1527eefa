#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map-layer projection for filtered incidents.
//!
//! Turns incident rows into the three things the map draws: styled
//! markers with popup details, weighted heat points, and the size class of
//! marker clusters. Rows without usable coordinates are skipped.

use crime_map_crime_models::{MarkerStyle, marker_style_for, translate_weekday};
use crime_map_source_models::IncidentRow;
use geo::{BoundingRect, MultiPoint, Point, Rect};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::{Deserialize, Serialize};

/// Heat weight given to each incident when none is configured.
pub const DEFAULT_HEAT_INTENSITY: f64 = 0.6;

/// Details shown when a marker is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub category: String,
    pub crime_type: String,
    pub date: String,
    pub time: String,
    /// Spanish weekday name.
    pub weekday: String,
    pub day_period: String,
}

/// A single plotted incident.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Position with `x` = longitude, `y` = latitude.
    pub point: Point<f64>,
    pub style: MarkerStyle,
    pub popup: Popup,
}

impl Marker {
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }
}

/// A weighted point in the heat layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

/// Upper bounds (inclusive) for the small and medium cluster classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ClusterThresholds {
    pub small_max: usize,
    pub medium_max: usize,
}

impl Default for ClusterThresholds {
    fn default() -> Self {
        Self {
            small_max: 10,
            medium_max: 100,
        }
    }
}

/// Visual size class of a marker cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterSize {
    Small,
    Medium,
    Large,
}

impl ClusterSize {
    /// Classifies a cluster by how many markers it contains.
    #[must_use]
    pub const fn for_count(count: usize, thresholds: &ClusterThresholds) -> Self {
        if count <= thresholds.small_max {
            Self::Small
        } else if count <= thresholds.medium_max {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Icon diameter in pixels.
    #[must_use]
    pub const fn diameter(self) -> u32 {
        match self {
            Self::Small => 40,
            Self::Medium => 48,
            Self::Large => 56,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Small => "cluster-small",
            Self::Medium => "cluster-medium",
            Self::Large => "cluster-large",
        }
    }
}

/// Builds one marker per row with parseable coordinates, in input order.
pub fn markers<'a, I>(rows: I) -> Vec<Marker>
where
    I: IntoIterator<Item = &'a IncidentRow>,
{
    let mut skipped = 0_usize;
    let markers = rows
        .into_iter()
        .filter_map(|row| {
            let Some((latitude, longitude)) = row.coordinates() else {
                skipped += 1;
                return None;
            };
            Some(Marker {
                point: Point::new(longitude, latitude),
                style: marker_style_for(&row.crime_category),
                popup: Popup {
                    category: row.crime_category.clone(),
                    crime_type: row.crime_type.clone(),
                    date: row.date.clone(),
                    time: row.time.clone(),
                    weekday: translate_weekday(&row.weekday_name).to_string(),
                    day_period: row.day_period.clone(),
                },
            })
        })
        .collect::<Vec<_>>();

    if skipped > 0 {
        log::debug!("Skipped {skipped} rows without usable coordinates");
    }

    markers
}

/// Builds the heat layer, weighting every located row by `intensity`.
pub fn heat_points<'a, I>(rows: I, intensity: f64) -> Vec<HeatPoint>
where
    I: IntoIterator<Item = &'a IncidentRow>,
{
    rows.into_iter()
        .filter_map(IncidentRow::coordinates)
        .map(|(lat, lng)| HeatPoint {
            lat,
            lng,
            intensity,
        })
        .collect()
}

/// Smallest rectangle containing every marker, for fitting the viewport.
#[must_use]
pub fn bounds(markers: &[Marker]) -> Option<Rect<f64>> {
    markers
        .iter()
        .map(|marker| marker.point)
        .collect::<MultiPoint<f64>>()
        .bounding_rect()
}

/// Converts markers into a `GeoJSON` feature collection with the popup
/// fields and marker style as feature properties.
#[must_use]
pub fn to_feature_collection(markers: &[Marker]) -> FeatureCollection {
    let features = markers
        .iter()
        .map(|marker| {
            let geometry =
                Geometry::new(Value::Point(vec![marker.longitude(), marker.latitude()]));
            let mut feature = Feature::from(geometry);
            feature.set_property("category", marker.popup.category.clone());
            feature.set_property("type", marker.popup.crime_type.clone());
            feature.set_property("date", marker.popup.date.clone());
            feature.set_property("time", marker.popup.time.clone());
            feature.set_property("weekday", marker.popup.weekday.clone());
            feature.set_property("period", marker.popup.day_period.clone());
            feature.set_property("emoji", marker.style.emoji);
            feature.set_property("color", marker.style.color);
            feature
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serializes markers as a `GeoJSON` string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_geojson_string(markers: &[Marker]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&to_feature_collection(markers))
}
