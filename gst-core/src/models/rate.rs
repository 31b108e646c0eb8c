use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a tax rate came from.
///
/// Free-form rates are capped at 100%; rates picked from the preset list
/// are trusted as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    #[default]
    Preset,
    Custom,
}

/// The state of the rate picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSelection {
    /// Nothing picked yet.
    #[default]
    Unset,
    /// One of the preset slabs, in percent.
    Preset(Decimal),
    /// The rate is read from the free-form custom field.
    Custom,
}

impl RateSelection {
    /// Parses the picker value: `""` is unset, `"custom"` selects the custom
    /// field, anything else must be a percentage.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Some(Self::Unset)
        } else if trimmed.eq_ignore_ascii_case("custom") {
            Some(Self::Custom)
        } else {
            trimmed
                .trim_end_matches('%')
                .parse::<Decimal>()
                .ok()
                .map(Self::Preset)
        }
    }
}

/// Standard GST slabs, in percent.
pub fn standard_rates() -> Vec<Decimal> {
    vec![
        Decimal::ZERO,
        Decimal::new(25, 2),
        Decimal::from(3),
        Decimal::from(5),
        Decimal::from(12),
        Decimal::from(18),
        Decimal::from(28),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_empty_is_unset() {
        assert_eq!(RateSelection::parse("  "), Some(RateSelection::Unset));
    }

    #[test]
    fn parse_custom_keyword() {
        assert_eq!(RateSelection::parse("Custom"), Some(RateSelection::Custom));
    }

    #[test]
    fn parse_numeric_preset_with_optional_percent_sign() {
        assert_eq!(
            RateSelection::parse("18"),
            Some(RateSelection::Preset(dec!(18)))
        );
        assert_eq!(
            RateSelection::parse("0.25%"),
            Some(RateSelection::Preset(dec!(0.25)))
        );
    }

    #[test]
    fn parse_garbage_is_none() {
        assert_eq!(RateSelection::parse("eighteen"), None);
    }

    #[test]
    fn standard_rates_are_ascending_slabs() {
        assert_eq!(
            standard_rates(),
            vec![dec!(0), dec!(0.25), dec!(3), dec!(5), dec!(12), dec!(18), dec!(28)]
        );
    }
}
