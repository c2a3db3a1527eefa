//! Plain-text rendering of the stats panel.

use std::fmt::Write as _;

use crime_map_analytics::StatsSummary;
use crime_map_filter_models::FilterState;

/// Width of a full-length bar, in characters.
const BAR_WIDTH: f64 = 30.0;

/// Renders the active filters, the record counts and one bar per group.
///
/// # Errors
///
/// Returns [`std::fmt::Error`] if writing to the output buffer fails.
pub fn render(
    filters: &FilterState,
    total_records: usize,
    summary: &StatsSummary,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    if !filters.is_unconstrained() {
        writeln!(out, "Filtros: {}", describe_filters(filters))?;
    }
    writeln!(
        out,
        "Mostrando {} de {total_records} incidentes",
        summary.total
    )?;
    writeln!(out)?;

    let label_width = summary
        .counts
        .iter()
        .map(|group| group.label.chars().count())
        .max()
        .unwrap_or(0);

    for group in &summary.counts {
        let emoji = group.emoji.as_deref().unwrap_or(" ");
        writeln!(
            out,
            "{emoji} {:<label_width$} {:>6} {}",
            group.label,
            group.count,
            bar(summary.bar_fraction(group.count)),
        )?;
    }

    Ok(out)
}

/// Active constraints as `field=value` pairs.
fn describe_filters(filters: &FilterState) -> String {
    let mut parts = Vec::new();

    if let Some(category) = filters.category {
        parts.push(format!("categoria={category}"));
    }
    if let Some(crime_type) = filters.crime_type {
        parts.push(format!("tipo={crime_type}"));
    }
    if let Some(weekday) = filters.weekday {
        parts.push(format!("dia={weekday}"));
    }
    if let Some(period) = filters.day_period {
        parts.push(format!("periodo={period}"));
    }
    if let Some(year) = &filters.year {
        parts.push(format!("anio={year}"));
    }
    if let Some(month) = filters.month {
        parts.push(format!("mes={month}"));
    }
    if !filters.date_from.is_empty() {
        parts.push(format!("desde={}", filters.date_from));
    }
    if !filters.date_to.is_empty() {
        parts.push(format!("hasta={}", filters.date_to));
    }

    parts.join(", ")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(fraction: f64) -> String {
    let len = (fraction.clamp(0.0, 1.0) * BAR_WIDTH).round() as usize;
    "█".repeat(len)
}

#[cfg(test)]
mod tests {
    use crime_map_analytics::LabelCount;
    use crime_map_crime_models::{CrimeCategory, Weekday};

    use super::*;

    fn group(label: &str, count: u64) -> LabelCount {
        LabelCount {
            label: label.to_string(),
            count,
            emoji: None,
            color: None,
        }
    }

    #[test]
    fn renders_counts_and_relative_bars() {
        let summary = StatsSummary::new(3, vec![group("ROBO/HURTO", 2), group("OTROS", 1)]);

        let text = render(&FilterState::default(), 10, &summary).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Mostrando 3 de 10 incidentes");
        assert!(lines[2].contains("ROBO/HURTO"));
        assert_eq!(lines[2].matches('█').count(), 30);
        assert_eq!(lines[3].matches('█').count(), 15);
    }

    #[test]
    fn header_lists_filters_when_constrained() {
        let filters = FilterState {
            year: Some("2024".to_string()),
            ..FilterState::default()
        };
        let summary = StatsSummary::new(1, vec![group("OTROS", 1)]);

        let text = render(&filters, 5, &summary).unwrap();

        assert!(text.starts_with("Filtros: anio=2024\nMostrando 1 de 5 incidentes\n"));
    }

    #[test]
    fn lists_active_filters() {
        let filters = FilterState {
            category: Some(CrimeCategory::RoboArmado),
            weekday: Some(Weekday::Wednesday),
            date_from: "2023-06-01".to_string(),
            ..FilterState::default()
        };

        assert_eq!(
            describe_filters(&filters),
            "categoria=ROBO ARMADO, dia=Miercoles, desde=2023-06-01"
        );
    }

    #[test]
    fn empty_summary_renders_header_only() {
        let summary = StatsSummary::new(0, Vec::new());

        let text = render(&FilterState::default(), 0, &summary).unwrap();

        assert_eq!(text, "Mostrando 0 de 0 incidentes\n\n");
    }
}
