#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard view-model.
//!
//! [`Dashboard`] is the single owner of the loaded incident set and the
//! current filter state. Every panel (filters, stats, map) reads from it,
//! and every filter change goes through it, so the filtered rows are
//! recomputed once per change and shared by all consumers.

pub mod config;

use std::sync::Arc;

use crime_map_analytics::{StatsSummary, count_by_category, count_by_icon};
use crime_map_crime_models::{CrimeType, types_for_category};
use crime_map_filter::{FilterStore, FilteredView, SubscriptionId};
use crime_map_filter_models::{FilterState, FilterUpdate};
use crime_map_source_models::IncidentRow;
use crime_map_spatial::{HeatPoint, Marker, bounds, heat_points, markers};

pub use config::{ConfigError, DashboardConfig};

/// Everything the map draws for the current filter.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayers {
    pub markers: Vec<Marker>,
    pub heat: Vec<HeatPoint>,
    /// Viewport that fits every marker, if there are any.
    pub bounds: Option<geo::Rect<f64>>,
}

/// The loaded incidents together with the filter state applied to them.
#[derive(Debug)]
pub struct Dashboard {
    store: FilterStore,
    view: FilteredView,
    config: DashboardConfig,
}

impl Dashboard {
    /// Creates a dashboard over `rows` with no active filters.
    #[must_use]
    pub fn new(rows: impl Into<Arc<[IncidentRow]>>, config: DashboardConfig) -> Self {
        let rows = rows.into();
        log::info!("Dashboard loaded with {} incidents", rows.len());

        let store = FilterStore::new();
        let mut view = FilteredView::new(rows);
        view.refresh(&store.snapshot());

        Self {
            store,
            view,
            config,
        }
    }

    /// The current filter snapshot.
    #[must_use]
    pub fn filters(&self) -> Arc<FilterState> {
        self.store.snapshot()
    }

    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Applies a single filter change.
    ///
    /// Returns `true` if the filter state changed.
    pub fn update_filter(&mut self, update: FilterUpdate) -> bool {
        let changed = self.store.update(update);
        self.sync();
        changed
    }

    /// Replaces the entire filter state at once.
    ///
    /// Returns `true` if the filter state changed.
    pub fn set_filters(&mut self, state: FilterState) -> bool {
        let changed = self.store.set(state);
        self.sync();
        changed
    }

    /// Clears every filter.
    ///
    /// Returns `true` if any filter was active.
    pub fn reset_filters(&mut self) -> bool {
        let changed = self.store.reset();
        self.sync();
        changed
    }

    /// Registers a callback run after every filter change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&Arc<FilterState>) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Rows matching the current filters, in dataset order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&IncidentRow> {
        self.view.to_vec()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Number of loaded incidents, regardless of filters.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.view.all_rows().len()
    }

    /// Top categories among the filtered rows.
    #[must_use]
    pub fn category_stats(&self) -> StatsSummary {
        count_by_category(self.view.rows(), Some(self.config.stats.top_categories))
    }

    /// Icon-bucket breakdown of the filtered rows.
    #[must_use]
    pub fn icon_stats(&self) -> StatsSummary {
        count_by_icon(self.view.rows())
    }

    /// Marker, heat, and bounds layers for the filtered rows.
    #[must_use]
    pub fn map_layers(&self) -> MapLayers {
        let markers = markers(self.view.rows());
        let heat = heat_points(self.view.rows(), self.config.map.heat.intensity);
        let bounds = bounds(&markers);

        MapLayers {
            markers,
            heat,
            bounds,
        }
    }

    /// Types offered by the type selector for the selected category.
    #[must_use]
    pub fn type_options(&self) -> Vec<CrimeType> {
        types_for_category(self.store.get().category)
    }

    /// Years offered by the year selector.
    #[must_use]
    pub fn year_options(&self) -> &[String] {
        &self.config.filters.years
    }

    fn sync(&mut self) {
        self.view.refresh(&self.store.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crime_map_crime_models::{CrimeCategory, Weekday};

    use super::*;

    fn row(category: &str, crime_type: &str, date: &str, weekday: &str) -> IncidentRow {
        IncidentRow {
            latitude: "-3.75".into(),
            longitude: "-73.25".into(),
            crime_category: category.to_string(),
            crime_type: crime_type.to_string(),
            date: date.to_string(),
            weekday_name: weekday.to_string(),
            day_period: "Noche".to_string(),
            month_name: "May".to_string(),
            ..IncidentRow::default()
        }
    }

    fn dashboard() -> Dashboard {
        let rows = vec![
            row("ROBO ARMADO", "ROBO CON ARMA DE FUEGO", "2023-05-10", "Wednesday"),
            row("ROBO/HURTO", "HURTO DE VEHICULO", "2023-05-11", "Thursday"),
            row("ROBO/HURTO", "HURTO DE DINERO", "2024-01-02", "Tuesday"),
            row("ROBO DE CELULAR", "ROBO CELULAR", "2024-02-03", "Saturday"),
        ];
        Dashboard::new(rows, DashboardConfig::default())
    }

    #[test]
    fn starts_unfiltered() {
        let dashboard = dashboard();

        assert!(dashboard.filters().is_unconstrained());
        assert_eq!(dashboard.total_records(), 4);
        assert_eq!(dashboard.filtered_count(), 4);
    }

    #[test]
    fn update_filter_narrows_every_panel() {
        let mut dashboard = dashboard();

        assert!(dashboard.update_filter(FilterUpdate::Category(Some(CrimeCategory::RoboHurto))));

        assert_eq!(dashboard.filtered_count(), 2);
        assert_eq!(dashboard.category_stats().total, 2);
        assert_eq!(dashboard.icon_stats().total, 2);
        assert_eq!(dashboard.map_layers().markers.len(), 2);
        assert_eq!(dashboard.total_records(), 4);
    }

    #[test]
    fn type_options_follow_category() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.type_options(), types_for_category(None));

        dashboard.update_filter(FilterUpdate::Category(Some(CrimeCategory::RoboDeCelular)));

        assert_eq!(
            dashboard.type_options(),
            CrimeCategory::RoboDeCelular.types().to_vec()
        );
    }

    #[test]
    fn reset_restores_full_set() {
        let mut dashboard = dashboard();
        dashboard.update_filter(FilterUpdate::Weekday(Some(Weekday::Wednesday)));
        assert_eq!(dashboard.filtered_count(), 1);

        assert!(dashboard.reset_filters());
        assert_eq!(dashboard.filtered_count(), 4);
        assert!(!dashboard.reset_filters());
    }

    #[test]
    fn subscribers_see_each_change_once() {
        let mut dashboard = dashboard();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        dashboard.subscribe(move |_| seen.set(seen.get() + 1));

        dashboard.update_filter(FilterUpdate::Year(Some("2024".to_string())));
        dashboard.update_filter(FilterUpdate::Year(Some("2024".to_string())));

        assert_eq!(calls.get(), 1);
        assert_eq!(dashboard.filtered_count(), 2);
    }

    #[test]
    fn date_range_filters_through_dashboard() {
        let mut dashboard = dashboard();

        dashboard.update_filter(FilterUpdate::date_from("2023-06-01").unwrap());
        dashboard.update_filter(FilterUpdate::date_to("2024-01-31").unwrap());

        let filtered = dashboard.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2024-01-02");
    }

    #[test]
    fn map_layers_fit_markers() {
        let dashboard = dashboard();

        let layers = dashboard.map_layers();

        assert_eq!(layers.heat.len(), 4);
        assert!(layers.bounds.is_some());
    }

    #[test]
    fn category_stats_respect_configured_limit() {
        let mut config = DashboardConfig::default();
        config.stats.top_categories = 1;
        let rows = dashboard().view.all_rows().to_vec();
        let dashboard = Dashboard::new(rows, config);

        let stats = dashboard.category_stats();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.counts.len(), 1);
        assert_eq!(stats.counts[0].label, "ROBO/HURTO");
    }
}
