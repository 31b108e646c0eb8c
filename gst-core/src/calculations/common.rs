//! Shared decimal helpers for GST arithmetic and display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, matching how amounts
/// are shown on an invoice.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gst_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `rate_percent` percent of `amount`, or `None` on overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gst_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(250), dec!(12)), Some(dec!(30)));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate_percent: Decimal,
) -> Option<Decimal> {
    amount
        .checked_mul(rate_percent)?
        .checked_div(Decimal::ONE_HUNDRED)
}

/// Returns `1 + rate_percent / 100`, the factor that turns a pre-tax amount
/// into a tax-inclusive one.
pub fn inclusive_factor(rate_percent: Decimal) -> Option<Decimal> {
    rate_percent
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_add(Decimal::ONE)
}
