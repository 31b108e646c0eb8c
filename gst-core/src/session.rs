//! Interactive calculator state.
//!
//! [`GstCalculator`] owns the input fields and the result currently on
//! display. Every edit recalculates the way a live form does, and the most
//! recent input always wins. Failed calculations clear the display and hand
//! back a [`Notice`] for the front end to show.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::calculations::{TaxCalculator, ValidationError};
use crate::display::ResultDisplay;
use crate::form::GstForm;
use crate::models::{CalculationResult, GstMode, RateSelection};

/// How long a validation notice stays up.
pub const ERROR_NOTICE_DURATION: Duration = Duration::from_millis(4000);

/// How long the reset confirmation stays up.
pub const CLEAR_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(
        message: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }

    pub fn cleared() -> Self {
        Self::new("Calculator cleared!", CLEAR_NOTICE_DURATION)
    }
}

impl From<ValidationError> for Notice {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string(), ERROR_NOTICE_DURATION)
    }
}

/// Calculator session: input fields, mode toggle and the displayed result.
#[derive(Debug, Clone, Default)]
pub struct GstCalculator {
    form: GstForm,
    result: Option<CalculationResult>,
    calculator: TaxCalculator,
}

impl GstCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in `mode` instead of the usual [`GstMode::Add`].
    pub fn with_mode(mode: GstMode) -> Self {
        let mut session = Self::new();
        session.form.mode = mode;
        session
    }

    pub fn form(&self) -> &GstForm {
        &self.form
    }

    pub fn mode(&self) -> GstMode {
        self.form.mode
    }

    /// The result currently on display, if any.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn display(
        &self,
        symbol: &str,
    ) -> ResultDisplay {
        ResultDisplay::from_optional(symbol, self.result.as_ref())
    }

    /// Updates the amount field and recalculates.
    pub fn set_amount(
        &mut self,
        amount: &str,
    ) -> Option<Notice> {
        self.form.amount = amount.to_string();
        self.calculate()
    }

    /// Updates the custom rate field and recalculates.
    pub fn set_custom_rate(
        &mut self,
        rate: &str,
    ) -> Option<Notice> {
        self.form.custom_rate = rate.to_string();
        self.calculate()
    }

    /// Changes the rate picker. Recalculates when an amount has been entered,
    /// otherwise just clears the display.
    pub fn select_rate(
        &mut self,
        selection: RateSelection,
    ) -> Option<Notice> {
        self.form.rate = selection;
        if self.form.has_amount() {
            self.calculate()
        } else {
            self.result = None;
            None
        }
    }

    /// Switches between adding and removing GST. Recalculates only when an
    /// amount has been entered.
    pub fn set_mode(
        &mut self,
        mode: GstMode,
    ) -> Option<Notice> {
        self.form.mode = mode;
        if self.form.has_amount() {
            self.calculate()
        } else {
            None
        }
    }

    /// Recomputes from the current fields.
    pub fn calculate(&mut self) -> Option<Notice> {
        match self
            .form
            .to_input()
            .and_then(|input| self.calculator.compute(&input))
        {
            Ok(result) => {
                self.result = Some(result);
                None
            }
            Err(error) => {
                debug!(%error, "clearing result after failed calculation");
                self.result = None;
                Some(error.into())
            }
        }
    }

    /// Resets every field and the mode, and clears the display.
    pub fn clear(&mut self) -> Notice {
        self.form = GstForm::default();
        self.result = None;
        Notice::cleared()
    }
}
