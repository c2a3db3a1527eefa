#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line dashboard over an exported crime incident dataset.
//!
//! Loads the dataset once, applies the filters given as flags, and prints
//! the stats panel. `--markers` prints the map markers as `GeoJSON` instead.

mod report;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crime_map_crime_models::{CrimeCategory, CrimeType, DayPeriod, Month, Weekday};
use crime_map_dashboard::{Dashboard, DashboardConfig};
use crime_map_filter::{FilterError, parse_selector};
use crime_map_filter_models::FilterUpdate;
use crime_map_source::LoadOptions;

#[derive(Parser)]
#[command(name = "crime_map_cli", about = "Iquitos crime dashboard")]
struct Cli {
    /// Dataset to load (`.json` array or `.csv`)
    #[arg(long)]
    data: PathBuf,
    /// Dashboard config TOML overriding the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of records to load (for testing)
    #[arg(long)]
    limit: Option<u64>,

    #[command(flatten)]
    filters: FilterArgs,

    /// Grouping used for the stats breakdown
    #[arg(long, value_enum, default_value_t = GroupBy::Category)]
    by: GroupBy,
    /// List the crime types offered for the selected category and exit
    #[arg(long)]
    list_types: bool,
    /// Print the filtered incidents as `GeoJSON` markers
    #[arg(long)]
    markers: bool,
}

/// Filter selectors. `ALL` (the default) leaves a field unconstrained.
#[derive(clap::Args, Default)]
struct FilterArgs {
    /// Crime category (e.g. "ROBO ARMADO")
    #[arg(long)]
    category: Option<String>,
    /// Crime type (e.g. "HURTO DE CELULAR")
    #[arg(long = "type")]
    crime_type: Option<String>,
    /// Spanish weekday name (e.g. "Miercoles")
    #[arg(long)]
    weekday: Option<String>,
    /// Day period (Madrugada, Mañana, Tarde, Noche)
    #[arg(long)]
    period: Option<String>,
    /// Four-digit year
    #[arg(long)]
    year: Option<String>,
    /// Spanish month name (e.g. "Mayo")
    #[arg(long)]
    month: Option<String>,
    /// Earliest date, `YYYY-MM-DD`
    #[arg(long)]
    from: Option<String>,
    /// Latest date, `YYYY-MM-DD`
    #[arg(long)]
    to: Option<String>,
}

impl FilterArgs {
    /// Converts the flags into filter updates.
    ///
    /// Category comes first because selecting a category clears the type.
    fn updates(&self) -> Result<Vec<FilterUpdate>, FilterError> {
        let mut updates = Vec::new();

        if let Some(value) = &self.category {
            updates.push(FilterUpdate::Category(parse_selector::<CrimeCategory>(
                "category", value,
            )?));
        }
        if let Some(value) = &self.crime_type {
            updates.push(FilterUpdate::CrimeType(parse_selector::<CrimeType>(
                "type", value,
            )?));
        }
        if let Some(value) = &self.weekday {
            updates.push(FilterUpdate::Weekday(parse_selector::<Weekday>(
                "weekday", value,
            )?));
        }
        if let Some(value) = &self.period {
            updates.push(FilterUpdate::DayPeriod(parse_selector::<DayPeriod>(
                "period", value,
            )?));
        }
        if let Some(value) = &self.year {
            updates.push(FilterUpdate::Year(parse_selector::<String>("year", value)?));
        }
        if let Some(value) = &self.month {
            updates.push(FilterUpdate::Month(parse_selector::<Month>("month", value)?));
        }
        if let Some(value) = &self.from {
            updates.push(FilterUpdate::date_from(value)?);
        }
        if let Some(value) = &self.to {
            updates.push(FilterUpdate::date_to(value)?);
        }

        Ok(updates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupBy {
    /// Top categories by raw category name
    Category,
    /// Icon buckets derived from type and category keywords
    Icon,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::embedded()?,
    };

    let options = LoadOptions {
        limit: cli.limit,
        ..LoadOptions::default()
    };
    let rows = crime_map_source::load_path(&cli.data, &options)?;

    let mut dashboard = Dashboard::new(rows, config);
    for update in cli.filters.updates()? {
        dashboard.update_filter(update);
    }

    if cli.list_types {
        for crime_type in dashboard.type_options() {
            println!("{crime_type}");
        }
        return Ok(());
    }

    if cli.markers {
        let layers = dashboard.map_layers();
        println!("{}", crime_map_spatial::to_geojson_string(&layers.markers)?);
        return Ok(());
    }

    let summary = match cli.by {
        GroupBy::Category => dashboard.category_stats(),
        GroupBy::Icon => dashboard.icon_stats(),
    };

    let text = report::render(&dashboard.filters(), dashboard.total_records(), &summary)?;
    print!("{text}");

    Ok(())
}
