//! Raw calculator fields as typed by the user.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::ValidationError;
use crate::models::{CalculationInput, GstMode, RateSelection, RateSource};
use crate::utils::{ParseDecimalError, parse_decimal};

/// Parses one field, mapping any failure to `error`.
fn parse_field(
    field: &'static str,
    text: &str,
    error: ValidationError,
) -> Result<Decimal, ValidationError> {
    parse_decimal(text).map_err(|e| {
        match e {
            ParseDecimalError::Empty => debug!(field, "field left blank"),
            ParseDecimalError::Invalid { .. } => debug!(field, %e, "field not numeric"),
        }
        error
    })
}

/// The calculator's input fields before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstForm {
    pub amount: String,
    pub rate: RateSelection,
    /// Only read when `rate` is [`RateSelection::Custom`].
    pub custom_rate: String,
    pub mode: GstMode,
}

impl GstForm {
    /// Returns `true` once something has been typed into the amount field.
    pub fn has_amount(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    /// Parses the fields into a [`CalculationInput`].
    ///
    /// The amount is fully checked (parsed and above zero) before the rate
    /// is looked at, so an amount error always wins. Rate range checks are
    /// left to [`TaxCalculator::compute`](crate::calculations::TaxCalculator::compute).
    pub fn to_input(&self) -> Result<CalculationInput, ValidationError> {
        let principal_amount =
            parse_field("amount", &self.amount, ValidationError::InvalidAmount)?;
        if principal_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }

        let (tax_rate_percent, rate_source) = match self.rate {
            RateSelection::Unset => return Err(ValidationError::InvalidRate),
            RateSelection::Preset(rate) => (rate, RateSource::Preset),
            RateSelection::Custom => (
                parse_field("custom_rate", &self.custom_rate, ValidationError::InvalidRate)?,
                RateSource::Custom,
            ),
        };

        Ok(CalculationInput {
            principal_amount,
            tax_rate_percent,
            mode: self.mode,
            rate_source,
        })
    }
}

impl fmt::Display for GstForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rate = match self.rate {
            RateSelection::Unset => "—".to_string(),
            RateSelection::Preset(rate) => format!("{rate}%"),
            RateSelection::Custom => format!("{}% (custom)", self.custom_rate.trim()),
        };
        writeln!(f, "Amount:    {}", self.amount.trim())?;
        writeln!(f, "GST rate:  {rate}")?;
        write!(f, "Operation: {}", self.mode.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn form(
        amount: &str,
        rate: RateSelection,
        custom_rate: &str,
    ) -> GstForm {
        GstForm {
            amount: amount.to_string(),
            rate,
            custom_rate: custom_rate.to_string(),
            mode: GstMode::Add,
        }
    }

    #[test]
    fn preset_rate_parses_to_preset_input() {
        let input = form("1,000", RateSelection::Preset(dec!(12)), "")
            .to_input()
            .unwrap();

        assert_eq!(input, CalculationInput::new(dec!(1000), dec!(12), GstMode::Add));
    }

    #[test]
    fn custom_rate_reads_custom_field() {
        let input = form("200", RateSelection::Custom, " 7.5 ").to_input().unwrap();

        assert_eq!(input, CalculationInput::custom(dec!(200), dec!(7.5), GstMode::Add));
    }

    #[test]
    fn custom_field_is_ignored_for_presets() {
        let input = form("200", RateSelection::Preset(dec!(5)), "oops")
            .to_input()
            .unwrap();

        assert_eq!(input.tax_rate_percent, dec!(5));
    }

    #[test]
    fn empty_amount_is_invalid_amount() {
        let result = form("", RateSelection::Preset(dec!(18)), "").to_input();

        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn non_numeric_amount_is_invalid_amount() {
        let result = form("ten", RateSelection::Unset, "").to_input();

        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn zero_amount_wins_over_unset_rate() {
        let result = form("0", RateSelection::Unset, "").to_input();

        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn negative_amount_wins_over_bad_custom_rate() {
        let result = form("-5", RateSelection::Custom, "abc").to_input();

        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn unset_rate_is_invalid_rate() {
        let result = form("100", RateSelection::Unset, "").to_input();

        assert_eq!(result, Err(ValidationError::InvalidRate));
    }

    #[test]
    fn blank_custom_rate_is_invalid_rate() {
        let result = form("100", RateSelection::Custom, "").to_input();

        assert_eq!(result, Err(ValidationError::InvalidRate));
    }

    #[test]
    fn has_amount_ignores_whitespace() {
        assert!(!form("  ", RateSelection::Unset, "").has_amount());
        assert!(form("0", RateSelection::Unset, "").has_amount());
    }

    #[test]
    fn display_shows_custom_rate() {
        let text = form("50", RateSelection::Custom, "3").to_string();

        assert_eq!(text, "Amount:    50\nGST rate:  3% (custom)\nOperation: Add GST");
    }
}
