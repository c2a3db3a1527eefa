#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime taxonomy, calendar translation, and type normalization tables.
//!
//! Defines the closed domains used across the dashboard (categories, canonical
//! crime types, weekdays, months, day periods) together with the lookup tables
//! that relate them: the category to type membership table, the misspelling
//! correction table for raw crime types, and the English/Spanish name tables
//! for weekdays and months.
//!
//! Source rows carry plain strings. The string-level helpers in this crate
//! ([`normalize_type`], [`translate_weekday`], [`weekday_to_english`], ...)
//! return their input unchanged when it falls outside the known domain.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Day of the week.
///
/// The source data names weekdays in English; the dashboard displays and
/// filters by the Spanish name.
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
pub enum Weekday {
    #[serde(rename = "Lunes")]
    #[strum(serialize = "Lunes")]
    Monday,
    #[serde(rename = "Martes")]
    #[strum(serialize = "Martes")]
    Tuesday,
    #[serde(rename = "Miercoles")]
    #[strum(serialize = "Miercoles")]
    Wednesday,
    #[serde(rename = "Jueves")]
    #[strum(serialize = "Jueves")]
    Thursday,
    #[serde(rename = "Viernes")]
    #[strum(serialize = "Viernes")]
    Friday,
    #[serde(rename = "Sabado")]
    #[strum(serialize = "Sabado")]
    Saturday,
    #[serde(rename = "Domingo")]
    #[strum(serialize = "Domingo")]
    Sunday,
}

impl Weekday {
    /// English name as produced by the data source.
    #[must_use]
    pub const fn english(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Spanish display name.
    #[must_use]
    pub const fn spanish(self) -> &'static str {
        match self {
            Self::Monday => "Lunes",
            Self::Tuesday => "Martes",
            Self::Wednesday => "Miercoles",
            Self::Thursday => "Jueves",
            Self::Friday => "Viernes",
            Self::Saturday => "Sabado",
            Self::Sunday => "Domingo",
        }
    }

    /// Looks up a weekday by its English name.
    #[must_use]
    pub fn from_english(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.english() == name)
    }

    /// Looks up a weekday by its Spanish name.
    #[must_use]
    pub fn from_spanish(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.spanish() == name)
    }

    /// Returns all weekdays, Monday first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

/// Calendar month.
///
/// Same convention as [`Weekday`]: English in the data, Spanish on screen.
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
pub enum Month {
    #[serde(rename = "Enero")]
    #[strum(serialize = "Enero")]
    January,
    #[serde(rename = "Febrero")]
    #[strum(serialize = "Febrero")]
    February,
    #[serde(rename = "Marzo")]
    #[strum(serialize = "Marzo")]
    March,
    #[serde(rename = "Abril")]
    #[strum(serialize = "Abril")]
    April,
    #[serde(rename = "Mayo")]
    #[strum(serialize = "Mayo")]
    May,
    #[serde(rename = "Junio")]
    #[strum(serialize = "Junio")]
    June,
    #[serde(rename = "Julio")]
    #[strum(serialize = "Julio")]
    July,
    #[serde(rename = "Agosto")]
    #[strum(serialize = "Agosto")]
    August,
    #[serde(rename = "Septiembre")]
    #[strum(serialize = "Septiembre")]
    September,
    #[serde(rename = "Octubre")]
    #[strum(serialize = "Octubre")]
    October,
    #[serde(rename = "Noviembre")]
    #[strum(serialize = "Noviembre")]
    November,
    #[serde(rename = "Diciembre")]
    #[strum(serialize = "Diciembre")]
    December,
}

impl Month {
    /// English name as produced by the data source.
    #[must_use]
    pub const fn english(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Spanish display name.
    #[must_use]
    pub const fn spanish(self) -> &'static str {
        match self {
            Self::January => "Enero",
            Self::February => "Febrero",
            Self::March => "Marzo",
            Self::April => "Abril",
            Self::May => "Mayo",
            Self::June => "Junio",
            Self::July => "Julio",
            Self::August => "Agosto",
            Self::September => "Septiembre",
            Self::October => "Octubre",
            Self::November => "Noviembre",
            Self::December => "Diciembre",
        }
    }

    /// Looks up a month by its English name.
    #[must_use]
    pub fn from_english(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.english() == name)
    }

    /// Looks up a month by its Spanish name.
    #[must_use]
    pub fn from_spanish(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.spanish() == name)
    }

    /// Returns all months, January first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }
}

/// Coarse time-of-day bucket. Only the Spanish form exists in the data.
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
pub enum DayPeriod {
    /// Early hours before sunrise
    #[serde(rename = "Madrugada")]
    #[strum(serialize = "Madrugada")]
    Dawn,
    #[serde(rename = "Mañana")]
    #[strum(serialize = "Mañana")]
    Morning,
    #[serde(rename = "Tarde")]
    #[strum(serialize = "Tarde")]
    Afternoon,
    #[serde(rename = "Noche")]
    #[strum(serialize = "Noche")]
    Night,
}

impl DayPeriod {
    /// Name as stored in the data and shown on screen.
    #[must_use]
    pub const fn spanish(self) -> &'static str {
        match self {
            Self::Dawn => "Madrugada",
            Self::Morning => "Mañana",
            Self::Afternoon => "Tarde",
            Self::Night => "Noche",
        }
    }

    /// Returns all periods in chronological order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dawn, Self::Morning, Self::Afternoon, Self::Night]
    }
}

/// Map marker appearance for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    /// Glyph drawn inside the marker.
    pub emoji: &'static str,
    /// Background color as a CSS hex string.
    pub color: &'static str,
}

/// Top-level crime categories, in display order.
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
pub enum CrimeCategory {
    /// Theft and robbery without a weapon
    #[serde(rename = "ROBO/HURTO")]
    #[strum(serialize = "ROBO/HURTO")]
    RoboHurto,
    #[serde(rename = "VIOLENCIA FAMILIAR")]
    #[strum(serialize = "VIOLENCIA FAMILIAR")]
    ViolenciaFamiliar,
    #[serde(rename = "ROBO ARMADO")]
    #[strum(serialize = "ROBO ARMADO")]
    RoboArmado,
    #[serde(rename = "ROBO DE CELULAR")]
    #[strum(serialize = "ROBO DE CELULAR")]
    RoboDeCelular,
    #[serde(rename = "ROBO DE VEHICULO")]
    #[strum(serialize = "ROBO DE VEHICULO")]
    RoboDeVehiculo,
    #[serde(rename = "OTROS")]
    #[strum(serialize = "OTROS")]
    Otros,
}

impl CrimeCategory {
    /// Canonical types that belong to this category, in selector order.
    #[must_use]
    pub const fn types(self) -> &'static [CrimeType] {
        match self {
            Self::RoboHurto => &[
                CrimeType::HurtoDeVehiculo,
                CrimeType::HurtoDeDinero,
                CrimeType::RoboDeVehiculo,
                CrimeType::RoboDeDinero,
                CrimeType::HurtoAgravado,
            ],
            Self::ViolenciaFamiliar => &[CrimeType::ViolenciaFamiliar],
            Self::RoboArmado => &[
                CrimeType::RoboConArmaDeFuego,
                CrimeType::AsaltoConArmaDeFuego,
            ],
            Self::RoboDeCelular => &[CrimeType::HurtoDeCelular, CrimeType::RoboDeCelular],
            Self::RoboDeVehiculo => &[CrimeType::HurtoDeVehiculo],
            Self::Otros => &[CrimeType::AsaltoConArmaDeFuego],
        }
    }

    /// Marker appearance used when plotting incidents of this category.
    #[must_use]
    pub const fn marker_style(self) -> MarkerStyle {
        match self {
            Self::RoboHurto => MarkerStyle {
                emoji: "💰",
                color: "#f59e0b",
            },
            Self::ViolenciaFamiliar => MarkerStyle {
                emoji: "👪",
                color: "#8b5cf6",
            },
            Self::RoboArmado => MarkerStyle {
                emoji: "🔫",
                color: "#ef4444",
            },
            Self::RoboDeCelular => MarkerStyle {
                emoji: "📱",
                color: "#3b82f6",
            },
            Self::RoboDeVehiculo => MarkerStyle {
                emoji: "🚗",
                color: "#10b981",
            },
            Self::Otros => MarkerStyle {
                emoji: "⚠️",
                color: "#6b7280",
            },
        }
    }

    /// Returns all categories, ordered by importance.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::RoboHurto,
            Self::ViolenciaFamiliar,
            Self::RoboArmado,
            Self::RoboDeCelular,
            Self::RoboDeVehiculo,
            Self::Otros,
        ]
    }
}

/// Marker style for a raw category string, falling back to
/// [`CrimeCategory::Otros`] for anything unrecognized.
#[must_use]
pub fn marker_style_for(raw_category: &str) -> MarkerStyle {
    raw_category
        .parse::<CrimeCategory>()
        .unwrap_or(CrimeCategory::Otros)
        .marker_style()
}

/// Canonical fine-grained crime types.
///
/// Raw source types are mapped onto these names with [`normalize_type`]
/// before being compared against a type filter.
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
pub enum CrimeType {
    #[serde(rename = "HURTO DE VEHICULO")]
    #[strum(serialize = "HURTO DE VEHICULO")]
    HurtoDeVehiculo,
    #[serde(rename = "HURTO DE DINERO")]
    #[strum(serialize = "HURTO DE DINERO")]
    HurtoDeDinero,
    #[serde(rename = "ROBO DE VEHICULO")]
    #[strum(serialize = "ROBO DE VEHICULO")]
    RoboDeVehiculo,
    #[serde(rename = "ROBO DE DINERO")]
    #[strum(serialize = "ROBO DE DINERO")]
    RoboDeDinero,
    #[serde(rename = "HURTO AGRAVADO")]
    #[strum(serialize = "HURTO AGRAVADO")]
    HurtoAgravado,
    #[serde(rename = "VIOLENCIA FAMILIAR")]
    #[strum(serialize = "VIOLENCIA FAMILIAR")]
    ViolenciaFamiliar,
    #[serde(rename = "ROBO CON ARMA DE FUEGO")]
    #[strum(serialize = "ROBO CON ARMA DE FUEGO")]
    RoboConArmaDeFuego,
    #[serde(rename = "ASALTO CON ARMA DE FUEGO")]
    #[strum(serialize = "ASALTO CON ARMA DE FUEGO")]
    AsaltoConArmaDeFuego,
    #[serde(rename = "HURTO DE CELULAR")]
    #[strum(serialize = "HURTO DE CELULAR")]
    HurtoDeCelular,
    #[serde(rename = "ROBO DE CELULAR")]
    #[strum(serialize = "ROBO DE CELULAR")]
    RoboDeCelular,
}

impl CrimeType {
    /// Returns all canonical types in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::HurtoDeVehiculo,
            Self::HurtoDeDinero,
            Self::RoboDeVehiculo,
            Self::RoboDeDinero,
            Self::HurtoAgravado,
            Self::ViolenciaFamiliar,
            Self::RoboConArmaDeFuego,
            Self::AsaltoConArmaDeFuego,
            Self::HurtoDeCelular,
            Self::RoboDeCelular,
        ]
    }

    /// Categories whose membership list contains this type.
    #[must_use]
    pub fn categories(self) -> Vec<CrimeCategory> {
        CrimeCategory::all()
            .iter()
            .copied()
            .filter(|cat| cat.types().contains(&self))
            .collect()
    }
}

/// Known misspellings found in the source data, keyed by the raw value.
const TYPE_CORRECTIONS: &[(&str, CrimeType)] = &[
    ("HURTO DE VHÍCULO", CrimeType::HurtoDeVehiculo),
    ("HURTO DE VEHÍCULO", CrimeType::HurtoDeVehiculo),
    ("ROBO CON ARMAR DE FUEGO", CrimeType::RoboConArmaDeFuego),
    ("ROBO DE DINRERO", CrimeType::RoboDeDinero),
    ("ROBO CELULAR", CrimeType::RoboDeCelular),
];

/// Maps a raw crime type onto its corrected spelling.
///
/// Strings not present in the correction table are returned unchanged, so
/// applying this twice is the same as applying it once.
#[must_use]
pub fn normalize_type(raw: &str) -> &str {
    TYPE_CORRECTIONS
        .iter()
        .find(|(misspelled, _)| *misspelled == raw)
        .map_or(raw, |(_, canonical)| canonical.as_ref())
}

/// Types offered by the type selector for the given category constraint.
///
/// With a category this is its membership list. Without one it is the union
/// of every list, deduplicated and sorted by canonical name.
#[must_use]
pub fn types_for_category(category: Option<CrimeCategory>) -> Vec<CrimeType> {
    if let Some(category) = category {
        return category.types().to_vec();
    }

    let mut types: Vec<CrimeType> = CrimeCategory::all()
        .iter()
        .flat_map(|cat| cat.types().iter().copied())
        .collect();
    types.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
    types.dedup();
    types
}

/// Translates an English weekday name to Spanish, passing unknown names through.
#[must_use]
pub fn translate_weekday(english: &str) -> &str {
    Weekday::from_english(english).map_or(english, |day| day.spanish())
}

/// Translates a Spanish weekday name to English, passing unknown names through.
#[must_use]
pub fn weekday_to_english(spanish: &str) -> &str {
    Weekday::from_spanish(spanish).map_or(spanish, |day| day.english())
}

/// Translates an English month name to Spanish, passing unknown names through.
#[must_use]
pub fn translate_month(english: &str) -> &str {
    Month::from_english(english).map_or(english, |month| month.spanish())
}

/// Translates a Spanish month name to English, passing unknown names through.
#[must_use]
pub fn month_to_english(spanish: &str) -> &str {
    Month::from_spanish(spanish).map_or(spanish, |month| month.english())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_type_corrects_known_misspellings() {
        assert_eq!(normalize_type("ROBO CELULAR"), "ROBO DE CELULAR");
        assert_eq!(normalize_type("HURTO DE VHÍCULO"), "HURTO DE VEHICULO");
        assert_eq!(normalize_type("HURTO DE VEHÍCULO"), "HURTO DE VEHICULO");
        assert_eq!(
            normalize_type("ROBO CON ARMAR DE FUEGO"),
            "ROBO CON ARMA DE FUEGO"
        );
        assert_eq!(normalize_type("ROBO DE DINRERO"), "ROBO DE DINERO");
    }

    #[test]
    fn normalize_type_is_identity_for_unknown_values() {
        assert_eq!(normalize_type("ESTAFA"), "ESTAFA");
        assert_eq!(normalize_type(""), "");
        assert_eq!(normalize_type("robo celular"), "robo celular");
    }

    #[test]
    fn normalize_type_is_idempotent() {
        let samples = TYPE_CORRECTIONS
            .iter()
            .map(|(raw, _)| *raw)
            .chain(CrimeType::all().iter().map(AsRef::as_ref))
            .chain(["", "ESTAFA", "ROBO  CELULAR"]);
        for raw in samples {
            let once = normalize_type(raw);
            assert_eq!(normalize_type(once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn corrections_target_canonical_types() {
        for (raw, canonical) in TYPE_CORRECTIONS {
            assert!(raw.parse::<CrimeType>().is_err(), "{raw} is already canonical");
            assert_eq!(normalize_type(raw), canonical.as_ref());
        }
    }

    #[test]
    fn weekday_translation_round_trips() {
        for day in Weekday::all() {
            let spanish = translate_weekday(day.english());
            assert_eq!(spanish, day.spanish());
            assert_eq!(weekday_to_english(spanish), day.english());
        }
    }

    #[test]
    fn month_translation_round_trips() {
        for month in Month::all() {
            let spanish = translate_month(month.english());
            assert_eq!(spanish, month.spanish());
            assert_eq!(month_to_english(spanish), month.english());
        }
    }

    #[test]
    fn translation_passes_unknown_names_through() {
        assert_eq!(translate_weekday("Funday"), "Funday");
        assert_eq!(weekday_to_english("Miércoles"), "Miércoles");
        assert_eq!(translate_month("Smarch"), "Smarch");
        assert_eq!(month_to_english(""), "");
    }

    #[test]
    fn translation_accepts_borrowed_input() {
        let weekday = String::from("Saturday");
        let month = format!("{}ugust", 'A');

        assert_eq!(translate_weekday(&weekday), "Sabado");
        assert_eq!(weekday_to_english(&weekday), "Saturday");
        assert_eq!(translate_month(&month), "Agosto");
        assert_eq!(month_to_english(&month), "August");
    }

    #[test]
    fn display_and_parse_use_spanish_names() {
        assert_eq!(Weekday::Wednesday.to_string(), "Miercoles");
        assert_eq!("Sabado".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!("Septiembre".parse::<Month>().unwrap(), Month::September);
        assert_eq!("Mañana".parse::<DayPeriod>().unwrap(), DayPeriod::Morning);
        assert_eq!(DayPeriod::Night.to_string(), DayPeriod::Night.spanish());
        assert!("Monday".parse::<Weekday>().is_err());
    }

    #[test]
    fn category_names_match_source_values() {
        assert_eq!(CrimeCategory::RoboHurto.as_ref(), "ROBO/HURTO");
        assert_eq!(
            "ROBO ARMADO".parse::<CrimeCategory>().unwrap(),
            CrimeCategory::RoboArmado
        );
        assert_eq!(CrimeCategory::all().len(), 6);
    }

    #[test]
    fn types_for_known_category_keep_table_order() {
        assert_eq!(
            types_for_category(Some(CrimeCategory::RoboArmado)),
            vec![
                CrimeType::RoboConArmaDeFuego,
                CrimeType::AsaltoConArmaDeFuego
            ]
        );
        assert_eq!(
            types_for_category(Some(CrimeCategory::RoboHurto))[0],
            CrimeType::HurtoDeVehiculo
        );
    }

    #[test]
    fn types_without_category_are_sorted_unique_union() {
        let types = types_for_category(None);
        let names: Vec<&str> = types.iter().map(AsRef::as_ref).collect();

        let mut expected: Vec<&str> = CrimeCategory::all()
            .iter()
            .flat_map(|c| c.types().iter().map(AsRef::as_ref))
            .collect();
        expected.sort_unstable();
        expected.dedup();

        assert_eq!(names, expected);
        assert_eq!(names.len(), CrimeType::all().len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_type_belongs_to_some_category() {
        for ty in CrimeType::all() {
            assert!(!ty.categories().is_empty(), "{ty:?} has no category");
        }
        assert_eq!(
            CrimeType::AsaltoConArmaDeFuego.categories(),
            vec![CrimeCategory::RoboArmado, CrimeCategory::Otros]
        );
    }

    #[test]
    fn unknown_category_uses_fallback_marker() {
        assert_eq!(
            marker_style_for("ROBO DE CELULAR"),
            CrimeCategory::RoboDeCelular.marker_style()
        );
        assert_eq!(
            marker_style_for("ESTAFA"),
            CrimeCategory::Otros.marker_style()
        );
    }
}
