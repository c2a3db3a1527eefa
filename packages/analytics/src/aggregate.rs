//! Grouping and counting of incident rows.

use std::collections::BTreeMap;

use crime_map_analytics_models::{LabelCount, StatsSummary};
use crime_map_crime_models::marker_style_for;
use crime_map_source_models::IncidentRow;

use crate::classify::classify;

/// How many category groups the stats panel shows by default.
pub const DEFAULT_TOP_CATEGORIES: usize = 8;

/// Counts rows per raw category string.
///
/// Groups are sorted by descending count; equal counts keep the order in
/// which each category was first seen. When `top_n` is given only that many
/// groups are kept, but `total` still counts every row.
pub fn count_by_category<'a, I>(rows: I, top_n: Option<usize>) -> StatsSummary
where
    I: IntoIterator<Item = &'a IncidentRow>,
{
    let mut total = 0_u64;
    let mut groups = group_counts(rows.into_iter().map(|row| {
        total += 1;
        row.crime_category.as_str()
    }));

    if let Some(n) = top_n {
        groups.truncate(n);
    }

    let counts = groups
        .into_iter()
        .map(|(category, count)| {
            let style = marker_style_for(category);
            LabelCount {
                label: category.to_string(),
                count,
                emoji: Some(style.emoji.to_string()),
                color: Some(style.color.to_string()),
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "count_by_category: {total} rows in {} groups (top_n={top_n:?})",
        counts.len()
    );

    StatsSummary::new(total, counts)
}

/// Counts rows per [`IconBucket`](crime_map_analytics_models::IconBucket), classified by type and category text.
///
/// Buckets with no rows are omitted. No truncation is applied.
pub fn count_by_icon<'a, I>(rows: I) -> StatsSummary
where
    I: IntoIterator<Item = &'a IncidentRow>,
{
    let mut total = 0_u64;
    let groups = group_counts(rows.into_iter().map(|row| {
        total += 1;
        classify(&row.crime_type, &row.crime_category)
    }));

    let counts = groups
        .into_iter()
        .map(|(bucket, count)| LabelCount {
            label: bucket.label().to_string(),
            count,
            emoji: Some(bucket.emoji().to_string()),
            color: Some(bucket.color().to_string()),
        })
        .collect::<Vec<_>>();

    log::debug!("count_by_icon: {total} rows in {} buckets", counts.len());

    StatsSummary::new(total, counts)
}

/// Counts occurrences of each key, preserving first-seen order, then
/// stable-sorts by descending count.
fn group_counts<K, I>(keys: I) -> Vec<(K, u64)>
where
    K: Ord + Copy,
    I: IntoIterator<Item = K>,
{
    let mut index: BTreeMap<K, usize> = BTreeMap::new();
    let mut groups: Vec<(K, u64)> = Vec::new();

    for key in keys {
        if let Some(&i) = index.get(&key) {
            groups[i].1 += 1;
        } else {
            index.insert(key, groups.len());
            groups.push((key, 1));
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}
