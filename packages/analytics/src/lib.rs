#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation of filtered incidents for the stats panel.
//!
//! Two grouping policies are offered: by the raw category string
//! ([`count_by_category`]) and by the keyword-derived [`IconBucket`]
//! ([`count_by_icon`]). Both count every input row exactly once, so the
//! group counts always add up to the summary total.

pub mod aggregate;
pub mod classify;

pub use aggregate::{DEFAULT_TOP_CATEGORIES, count_by_category, count_by_icon};
pub use classify::{ICON_RULES, IconRule, RuleField, classify};
pub use crime_map_analytics_models::{IconBucket, LabelCount, StatsSummary};
