#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregate statistics types for the stats panel.
//!
//! A [`StatsSummary`] is what the panel renders: the total number of
//! filtered incidents plus a list of `(label, count)` pairs sorted by count,
//! with the largest count kept for relative bar widths.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Display-oriented incident class derived from type and category text.
///
/// Distinct from the category taxonomy: a row's bucket comes from keyword
/// matches, so e.g. a `ROBO/HURTO` row typed `HURTO DE VEHICULO` lands in
/// [`IconBucket::Vehicle`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IconBucket {
    Vehicle,
    Phone,
    Weapon,
    DomesticViolence,
    Money,
    Other,
}

impl IconBucket {
    /// Spanish label shown in the stats panel and legend.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "Robo de Vehiculo",
            Self::Phone => "Robo de Celular",
            Self::Weapon => "Robo Armado",
            Self::DomesticViolence => "Violencia Familiar",
            Self::Money => "Robo de Dinero",
            Self::Other => "Otros",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Vehicle => "🚗",
            Self::Phone => "📱",
            Self::Weapon => "🔫",
            Self::DomesticViolence => "👪",
            Self::Money => "💰",
            Self::Other => "⚠️",
        }
    }

    /// CSS hex color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Vehicle => "#10b981",
            Self::Phone => "#3b82f6",
            Self::Weapon => "#ef4444",
            Self::DomesticViolence => "#8b5cf6",
            Self::Money => "#f59e0b",
            Self::Other => "#6b7280",
        }
    }

    /// Returns all buckets in legend order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vehicle,
            Self::Phone,
            Self::Weapon,
            Self::DomesticViolence,
            Self::Money,
            Self::Other,
        ]
    }
}

/// Count of incidents under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    /// Group label (a raw category, or an icon bucket label).
    pub label: String,
    /// Number of incidents.
    pub count: u64,
    /// Marker glyph, when the group has one.
    pub emoji: Option<String>,
    /// CSS hex color, when the group has one.
    pub color: Option<String>,
}

/// Aggregated counts for the filtered incident set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Number of filtered incidents.
    pub total: u64,
    /// Groups sorted by descending count.
    pub counts: Vec<LabelCount>,
    /// Largest group count, or 1 when there are no groups.
    pub max_count: u64,
}

impl StatsSummary {
    /// Builds a summary from groups already sorted by descending count.
    #[must_use]
    pub fn new(total: u64, counts: Vec<LabelCount>) -> Self {
        let max_count = counts.first().map_or(1, |c| c.count.max(1));
        Self {
            total,
            counts,
            max_count,
        }
    }

    /// Width of a group's bar relative to the largest group, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bar_fraction(&self, count: u64) -> f64 {
        count as f64 / self.max_count as f64
    }

    /// Sum of all group counts.
    #[must_use]
    pub fn grouped_total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }
}
