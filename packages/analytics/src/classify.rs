//! Keyword classification of incidents into [`IconBucket`]s.
//!
//! Rules are evaluated in order and the first match wins. All type rules
//! come before all category rules, so a row's type text always takes
//! precedence over its category.

use crime_map_analytics_models::IconBucket;

/// Which incident field a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    /// The raw crime type.
    Type,
    /// The raw crime category.
    Category,
}

/// Assigns `bucket` when the uppercased `field` contains any of `needles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRule {
    pub field: RuleField,
    pub needles: &'static [&'static str],
    pub bucket: IconBucket,
}

impl IconRule {
    /// Tests the rule against already-uppercased type and category text.
    #[must_use]
    pub fn matches(&self, upper_type: &str, upper_category: &str) -> bool {
        let haystack = match self.field {
            RuleField::Type => upper_type,
            RuleField::Category => upper_category,
        };
        self.needles.iter().any(|needle| haystack.contains(needle))
    }
}

/// Classification rules, highest precedence first.
pub const ICON_RULES: &[IconRule] = &[
    // ── Type text ───────────────────────────────────────────────────
    IconRule {
        field: RuleField::Type,
        needles: &["VEHICULO", "VEHÍCULO"],
        bucket: IconBucket::Vehicle,
    },
    IconRule {
        field: RuleField::Type,
        needles: &["CELULAR"],
        bucket: IconBucket::Phone,
    },
    IconRule {
        field: RuleField::Type,
        needles: &["ARMA", "ASALTO"],
        bucket: IconBucket::Weapon,
    },
    IconRule {
        field: RuleField::Type,
        needles: &["VIOLENCIA", "FAMILIAR"],
        bucket: IconBucket::DomesticViolence,
    },
    IconRule {
        field: RuleField::Type,
        needles: &["DINERO"],
        bucket: IconBucket::Money,
    },
    // ── Category text ───────────────────────────────────────────────
    IconRule {
        field: RuleField::Category,
        needles: &["VEHICULO", "VEHÍCULO"],
        bucket: IconBucket::Vehicle,
    },
    IconRule {
        field: RuleField::Category,
        needles: &["CELULAR"],
        bucket: IconBucket::Phone,
    },
    IconRule {
        field: RuleField::Category,
        needles: &["ARMADO"],
        bucket: IconBucket::Weapon,
    },
    IconRule {
        field: RuleField::Category,
        needles: &["VIOLENCIA"],
        bucket: IconBucket::DomesticViolence,
    },
];

/// Classifies an incident by its raw type and category text.
///
/// Returns [`IconBucket::Other`] when no rule matches.
#[must_use]
pub fn classify(crime_type: &str, category: &str) -> IconBucket {
    let upper_type = crime_type.to_uppercase();
    let upper_category = category.to_uppercase();

    ICON_RULES
        .iter()
        .find(|rule| rule.matches(&upper_type, &upper_category))
        .map_or(IconBucket::Other, |rule| rule.bucket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_type_keywords() {
        assert_eq!(classify("HURTO DE VEHICULO", "ROBO/HURTO"), IconBucket::Vehicle);
        assert_eq!(classify("ROBO CELULAR", "OTROS"), IconBucket::Phone);
        assert_eq!(classify("ASALTO CON ARMA DE FUEGO", "OTROS"), IconBucket::Weapon);
        assert_eq!(
            classify("VIOLENCIA FAMILIAR", "VIOLENCIA FAMILIAR"),
            IconBucket::DomesticViolence
        );
        assert_eq!(classify("HURTO DE DINERO", "ROBO/HURTO"), IconBucket::Money);
    }

    #[test]
    fn type_matching_ignores_case() {
        assert_eq!(classify("hurto de vehículo", ""), IconBucket::Vehicle);
        assert_eq!(classify("robo de celular", ""), IconBucket::Phone);
    }

    #[test]
    fn earlier_rules_win() {
        // "ROBO DE CELULAR CON ARMA" hits both Phone and Weapon type rules.
        assert_eq!(classify("ROBO DE CELULAR CON ARMA", ""), IconBucket::Phone);
        // "ARMA" is a substring of "ARMADO" but type rules run first.
        assert_eq!(classify("ROBO DE DINERO", "ROBO ARMADO"), IconBucket::Money);
    }

    #[test]
    fn falls_back_to_category_keywords() {
        assert_eq!(classify("ESTAFA", "ROBO DE VEHICULO"), IconBucket::Vehicle);
        assert_eq!(classify("ESTAFA", "ROBO DE CELULAR"), IconBucket::Phone);
        assert_eq!(classify("ESTAFA", "ROBO ARMADO"), IconBucket::Weapon);
        assert_eq!(classify("ESTAFA", "VIOLENCIA FAMILIAR"), IconBucket::DomesticViolence);
    }

    #[test]
    fn misspelled_type_uses_category() {
        // "VHÍCULO" matches no type keyword; the category decides.
        assert_eq!(classify("HURTO DE VHÍCULO", "ROBO/HURTO"), IconBucket::Other);
        assert_eq!(classify("HURTO DE VHÍCULO", "ROBO DE VEHICULO"), IconBucket::Vehicle);
    }

    #[test]
    fn unmatched_is_other() {
        assert_eq!(classify("HURTO AGRAVADO", "ROBO/HURTO"), IconBucket::Other);
        assert_eq!(classify("", ""), IconBucket::Other);
    }

    #[test]
    fn rules_only_inspect_their_own_field() {
        let weapon_by_category = ICON_RULES
            .iter()
            .find(|rule| rule.field == RuleField::Category && rule.bucket == IconBucket::Weapon)
            .unwrap();

        assert!(weapon_by_category.matches("", "ROBO ARMADO"));
        assert!(!weapon_by_category.matches("ROBO ARMADO", ""));
    }

    #[test]
    fn each_rule_fires_on_its_own_needles() {
        for rule in ICON_RULES {
            for needle in rule.needles {
                let (ty, cat) = match rule.field {
                    RuleField::Type => (*needle, ""),
                    RuleField::Category => ("", *needle),
                };
                assert!(rule.matches(ty, cat), "{rule:?} missed {needle}");
            }
        }
    }
}
