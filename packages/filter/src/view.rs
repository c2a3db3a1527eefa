//! Filtered rows cached per filter snapshot.

use std::sync::Arc;

use crime_map_filter_models::FilterState;
use crime_map_source_models::IncidentRow;

use crate::engine::matches;

/// The rows matching the most recently seen filter snapshot.
///
/// Recomputes only when handed a snapshot that is not the same allocation as
/// the previous one.
#[derive(Debug)]
pub struct FilteredView {
    rows: Arc<[IncidentRow]>,
    snapshot: Option<Arc<FilterState>>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// Creates a view over `rows`. Nothing is filtered until [`Self::refresh`].
    #[must_use]
    pub fn new(rows: Arc<[IncidentRow]>) -> Self {
        Self {
            rows,
            snapshot: None,
            indices: Vec::new(),
        }
    }

    /// Brings the view up to date with `snapshot`.
    ///
    /// Returns `true` if the filter was re-run.
    pub fn refresh(&mut self, snapshot: &Arc<FilterState>) -> bool {
        if self
            .snapshot
            .as_ref()
            .is_some_and(|seen| Arc::ptr_eq(seen, snapshot))
        {
            return false;
        }

        self.indices = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches(row, snapshot))
            .map(|(i, _)| i)
            .collect();
        self.snapshot = Some(Arc::clone(snapshot));

        log::debug!(
            "Filtered {} of {} rows",
            self.indices.len(),
            self.rows.len()
        );
        true
    }

    /// Matching rows in their original order.
    pub fn rows(&self) -> impl Iterator<Item = &IncidentRow> + '_ {
        self.indices.iter().map(|&i| &self.rows[i])
    }

    /// Matching rows collected into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&IncidentRow> {
        self.rows().collect()
    }

    /// Number of matching rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no row matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Every row, filtered or not.
    #[must_use]
    pub fn all_rows(&self) -> &[IncidentRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FilterStore;
    use crime_map_crime_models::Weekday;
    use crime_map_filter_models::FilterUpdate;

    fn rows() -> Arc<[IncidentRow]> {
        ["Monday", "Tuesday", "Monday"]
            .iter()
            .map(|day| IncidentRow {
                weekday_name: (*day).to_string(),
                ..IncidentRow::default()
            })
            .collect()
    }

    #[test]
    fn recomputes_only_for_new_snapshots() {
        let mut store = FilterStore::new();
        let mut view = FilteredView::new(rows());

        assert!(view.refresh(&store.snapshot()));
        assert_eq!(view.len(), 3);
        assert!(!view.refresh(&store.snapshot()));

        store.update(FilterUpdate::Weekday(Some(Weekday::Monday)));
        assert!(view.refresh(&store.snapshot()));
        assert_eq!(view.len(), 2);
        assert!(view.rows().all(|r| r.weekday_name == "Monday"));
    }

    #[test]
    fn equal_but_distinct_snapshot_triggers_recompute() {
        let mut view = FilteredView::new(rows());
        let first = Arc::new(FilterState::default());
        let second = Arc::new(FilterState::default());

        assert!(view.refresh(&first));
        assert!(view.refresh(&second));
        assert!(!view.refresh(&second));
    }

    #[test]
    fn empty_before_first_refresh() {
        let view = FilteredView::new(rows());
        assert!(view.is_empty());
        assert_eq!(view.all_rows().len(), 3);
    }
}
