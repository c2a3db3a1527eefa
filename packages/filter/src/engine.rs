//! The row predicate and the stable filter built on it.

use crime_map_crime_models::normalize_type;
use crime_map_filter_models::FilterState;
use crime_map_source_models::IncidentRow;

/// Returns `true` if `row` satisfies every active constraint in `filters`.
///
/// Rows with an empty date never satisfy a year or date-range constraint.
/// Date bounds compare the raw date string lexicographically, which matches
/// calendar order for zero-padded `YYYY-MM-DD` dates.
#[must_use]
pub fn matches(row: &IncidentRow, filters: &FilterState) -> bool {
    if let Some(category) = filters.category
        && row.crime_category != category.as_ref()
    {
        return false;
    }

    if let Some(crime_type) = filters.crime_type
        && normalize_type(&row.crime_type) != crime_type.as_ref()
    {
        return false;
    }

    if let Some(weekday) = filters.weekday
        && row.weekday_name != weekday.english()
    {
        return false;
    }

    if let Some(period) = filters.day_period
        && row.day_period != period.spanish()
    {
        return false;
    }

    if filters.has_date_constraint() && row.date.is_empty() {
        return false;
    }

    if let Some(year) = &filters.year
        && row.year() != year.as_str()
    {
        return false;
    }

    if let Some(month) = filters.month
        && row.month_name != month.english()
    {
        return false;
    }

    if !filters.date_from.is_empty() && row.date < filters.date_from {
        return false;
    }

    if !filters.date_to.is_empty() && row.date > filters.date_to {
        return false;
    }

    true
}

/// Returns the rows that satisfy `filters`, in their original order.
#[must_use]
pub fn apply_filters<'a>(rows: &'a [IncidentRow], filters: &FilterState) -> Vec<&'a IncidentRow> {
    rows.iter().filter(|row| matches(row, filters)).collect()
}
