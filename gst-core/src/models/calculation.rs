use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{GstMode, RateSource};

/// A validated-on-use request for one GST calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Pre-tax amount in `Add` mode, tax-inclusive amount in `Remove` mode.
    pub principal_amount: Decimal,

    /// Tax rate in percent (18 means 18%).
    pub tax_rate_percent: Decimal,

    pub mode: GstMode,

    /// Custom rates are capped at 100%.
    pub rate_source: RateSource,
}

impl CalculationInput {
    /// Input with a preset rate, which is not subject to the 100% cap.
    pub fn new(
        principal_amount: Decimal,
        tax_rate_percent: Decimal,
        mode: GstMode,
    ) -> Self {
        Self {
            principal_amount,
            tax_rate_percent,
            mode,
            rate_source: RateSource::Preset,
        }
    }

    /// Input with a free-form rate.
    pub fn custom(
        principal_amount: Decimal,
        tax_rate_percent: Decimal,
        mode: GstMode,
    ) -> Self {
        Self {
            rate_source: RateSource::Custom,
            ..Self::new(principal_amount, tax_rate_percent, mode)
        }
    }
}

/// Figures produced by a GST calculation. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Tax-inclusive total. Equals the principal in `Remove` mode.
    pub final_amount: Decimal,

    /// Total GST.
    pub tax_amount: Decimal,

    /// Half of the GST, shown once as CGST and once as SGST.
    pub half_tax_amount: Decimal,

    /// Pre-tax amount. Equals the principal in `Add` mode.
    pub base_amount: Decimal,
}
