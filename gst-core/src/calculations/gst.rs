//! GST arithmetic.
//!
//! | Mode     | Tax                           | Final amount | Base amount          |
//! |----------|-------------------------------|--------------|----------------------|
//! | `add`    | principal × rate / 100        | principal + tax | principal         |
//! | `remove` | principal − base              | principal    | principal / (1 + rate/100) |
//!
//! In both modes the tax is split evenly into CGST and SGST. Nothing is
//! rounded here; rounding to two places happens when a result is displayed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gst_core::calculations::TaxCalculator;
//! use gst_core::{CalculationInput, GstMode};
//!
//! let calculator = TaxCalculator::new();
//!
//! let added = calculator
//!     .compute(&CalculationInput::new(dec!(100), dec!(18), GstMode::Add))
//!     .unwrap();
//! assert_eq!(added.final_amount, dec!(118));
//! assert_eq!(added.half_tax_amount, dec!(9));
//!
//! let removed = calculator
//!     .compute(&CalculationInput::new(dec!(118), dec!(18), GstMode::Remove))
//!     .unwrap();
//! assert_eq!(removed.tax_amount, dec!(18));
//! assert_eq!(removed.base_amount, dec!(100));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{inclusive_factor, percent_of};
use crate::models::{CalculationInput, CalculationResult, GstMode, RateSource};

/// Highest rate accepted from free-form entry.
pub const MAX_CUSTOM_RATE: Decimal = Decimal::ONE_HUNDRED;

/// Reasons a calculation is refused. The messages are shown to the user
/// verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount missing, non-numeric, zero or negative.
    #[error("Please enter a valid amount (greater than 0).")]
    InvalidAmount,

    /// Rate missing, non-numeric, negative, or a custom rate above 100.
    #[error("Please select a valid GST rate or enter a custom rate between 0-100%.")]
    InvalidRate,
}

/// Stateless GST calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Validates `input` and computes the GST figures.
    ///
    /// # Errors
    ///
    /// Checks run in order and the first failure wins:
    /// - [`ValidationError::InvalidAmount`] if the principal is not above zero
    /// - [`ValidationError::InvalidRate`] if the rate is negative, or is a
    ///   custom rate above [`MAX_CUSTOM_RATE`]
    ///
    /// Amounts too large to represent are reported as `InvalidAmount`.
    ///
    /// `half_tax_amount` is `tax_amount / 2`. When the tax already uses all
    /// 28 significant digits (common in `Remove` mode, e.g. 1 at 18%) the
    /// division rounds in the last digit, so `half_tax_amount * 2` equals
    /// `tax_amount` only to within Decimal precision.
    pub fn compute(
        &self,
        input: &CalculationInput,
    ) -> Result<CalculationResult, ValidationError> {
        self.validate(input).inspect_err(|error| {
            warn!(
                principal = %input.principal_amount,
                rate = %input.tax_rate_percent,
                source = ?input.rate_source,
                %error,
                "rejected GST input"
            );
        })?;

        let (final_amount, tax_amount, base_amount) = match input.mode {
            GstMode::Add => self.add_tax(input.principal_amount, input.tax_rate_percent),
            GstMode::Remove => self.remove_tax(input.principal_amount, input.tax_rate_percent),
        }
        .ok_or(ValidationError::InvalidAmount)?;

        let half_tax_amount = tax_amount / Decimal::TWO;

        debug!(
            mode = %input.mode,
            %final_amount,
            %tax_amount,
            %base_amount,
            "computed GST"
        );

        Ok(CalculationResult {
            final_amount,
            tax_amount,
            half_tax_amount,
            base_amount,
        })
    }

    fn validate(
        &self,
        input: &CalculationInput,
    ) -> Result<(), ValidationError> {
        if input.principal_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }
        if input.tax_rate_percent < Decimal::ZERO {
            return Err(ValidationError::InvalidRate);
        }
        if input.rate_source == RateSource::Custom && input.tax_rate_percent > MAX_CUSTOM_RATE {
            return Err(ValidationError::InvalidRate);
        }
        Ok(())
    }

    /// Returns `(final, tax, base)` with the principal as the pre-tax amount.
    fn add_tax(
        &self,
        principal: Decimal,
        rate: Decimal,
    ) -> Option<(Decimal, Decimal, Decimal)> {
        let tax = percent_of(principal, rate)?;
        let final_amount = principal.checked_add(tax)?;
        Some((final_amount, tax, principal))
    }

    /// Returns `(final, tax, base)` with the principal as the tax-inclusive
    /// amount.
    fn remove_tax(
        &self,
        principal: Decimal,
        rate: Decimal,
    ) -> Option<(Decimal, Decimal, Decimal)> {
        let base = principal.checked_div(inclusive_factor(rate)?)?;
        let tax = principal - base;
        Some((principal, tax, base))
    }
}
