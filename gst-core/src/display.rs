//! Currency formatting for calculation results.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::CalculationResult;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Formats `value` as `"{symbol} {value}"` with exactly two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use gst_core::display::format_currency;
///
/// assert_eq!(format_currency("₹", dec!(1234.5)), "₹ 1234.50");
/// assert_eq!(format_currency("₹", dec!(0.005)), "₹ 0.01");
/// ```
pub fn format_currency(
    symbol: &str,
    value: Decimal,
) -> String {
    format!("{symbol} {:.2}", round_half_up(value))
}

/// The four figures shown after a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDisplay {
    pub final_amount: String,
    pub gst_amount: String,
    pub cgst_amount: String,
    pub sgst_amount: String,
}

impl ResultDisplay {
    pub fn from_result(
        symbol: &str,
        result: &CalculationResult,
    ) -> Self {
        Self {
            final_amount: format_currency(symbol, result.final_amount),
            gst_amount: format_currency(symbol, result.tax_amount),
            cgst_amount: format_currency(symbol, result.half_tax_amount),
            sgst_amount: format_currency(symbol, result.half_tax_amount),
        }
    }

    /// Every figure reads as zero.
    pub fn cleared(symbol: &str) -> Self {
        let zero = format_currency(symbol, Decimal::ZERO);
        Self {
            final_amount: zero.clone(),
            gst_amount: zero.clone(),
            cgst_amount: zero.clone(),
            sgst_amount: zero,
        }
    }

    /// Formats `result`, or zeros when there is none.
    pub fn from_optional(
        symbol: &str,
        result: Option<&CalculationResult>,
    ) -> Self {
        result.map_or_else(
            || Self::cleared(symbol),
            |result| Self::from_result(symbol, result),
        )
    }
}

impl fmt::Display for ResultDisplay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Final amount: {}", self.final_amount)?;
        writeln!(f, "GST amount:   {}", self.gst_amount)?;
        writeln!(f, "CGST:         {}", self.cgst_amount)?;
        write!(f, "SGST:         {}", self.sgst_amount)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_currency_pads_to_two_places() {
        assert_eq!(format_currency("₹", dec!(118)), "₹ 118.00");
        assert_eq!(format_currency("$", dec!(9.5)), "$ 9.50");
    }

    #[test]
    fn format_currency_rounds_long_quotients() {
        assert_eq!(format_currency("₹", dec!(100) / dec!(1.18)), "₹ 84.75");
    }

    #[test]
    fn cleared_display_is_all_zero() {
        let display = ResultDisplay::cleared(DEFAULT_CURRENCY_SYMBOL);

        assert_eq!(display.final_amount, "₹ 0.00");
        assert_eq!(display.gst_amount, "₹ 0.00");
        assert_eq!(display.cgst_amount, "₹ 0.00");
        assert_eq!(display.sgst_amount, "₹ 0.00");
    }

    #[test]
    fn cgst_and_sgst_show_the_same_half() {
        let result = CalculationResult {
            final_amount: dec!(118),
            tax_amount: dec!(18),
            half_tax_amount: dec!(9),
            base_amount: dec!(100),
        };

        let display = ResultDisplay::from_result("₹", &result);

        assert_eq!(display.final_amount, "₹ 118.00");
        assert_eq!(display.gst_amount, "₹ 18.00");
        assert_eq!(display.cgst_amount, "₹ 9.00");
        assert_eq!(display.sgst_amount, "₹ 9.00");
    }

    #[test]
    fn display_lists_four_lines() {
        let text = ResultDisplay::cleared("₹").to_string();

        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Final amount: ₹ 0.00"));
    }
}
