//! Command handling for `gst-calc`.
//!
//! One-shot calculations go through [`build_form`] and [`calculate`]. The
//! interactive session reads one [`SessionCommand`] per line and drives a
//! [`GstCalculator`] the way the calculator page reacts to edits.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use gst_core::{
    CalculationResult, GstCalculator, GstForm, GstMode, Notice, RateSelection, ResultDisplay,
    TaxCalculator, ValidationError, format_currency,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

// ─── one-shot ────────────────────────────────────────────────────────────────

/// Assembles the calculator fields from command-line values.
///
/// A `--rate` value that is neither a number nor `custom` is reported as
/// [`ValidationError::InvalidRate`], after the amount has been checked.
pub fn build_form(
    amount: &str,
    rate: Option<&str>,
    custom_rate: Option<&str>,
    mode: GstMode,
) -> Result<GstForm, ValidationError> {
    let selection = match (rate, custom_rate) {
        (_, Some(_)) => Some(RateSelection::Custom),
        (Some(rate), None) => RateSelection::parse(rate),
        (None, None) => Some(RateSelection::Unset),
    };

    let form = GstForm {
        amount: amount.to_string(),
        rate: selection.unwrap_or_default(),
        custom_rate: custom_rate.unwrap_or_default().to_string(),
        mode,
    };

    if selection.is_none() {
        // Amount errors take precedence over an unparseable rate.
        return Err(form.to_input().err().unwrap_or(ValidationError::InvalidRate));
    }
    Ok(form)
}

/// Parses and computes in one step.
pub fn calculate(form: &GstForm) -> Result<CalculationResult, ValidationError> {
    let input = form.to_input()?;
    TaxCalculator::new().compute(&input)
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    mode: GstMode,
    result: &'a CalculationResult,
    display: ResultDisplay,
}

/// Renders a result as the four display lines, or as JSON including the
/// unrounded figures and the base amount.
pub fn render_result(
    form: &GstForm,
    result: &CalculationResult,
    config: &Config,
    json: bool,
) -> Result<String> {
    let display = ResultDisplay::from_result(&config.currency_symbol, result);
    if json {
        let report = JsonReport {
            mode: form.mode,
            result,
            display,
        };
        serde_json::to_string_pretty(&report).context("failed to serialize result")
    } else {
        Ok(display.to_string())
    }
}

// ─── session ─────────────────────────────────────────────────────────────────

/// Errors for lines the session cannot understand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a rate; use a percentage or 'custom'")]
    BadRate(String),

    #[error("'{0}' is not a mode; use 'add' or 'remove'")]
    BadMode(String),
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Amount(String),
    Rate(RateSelection),
    Custom(String),
    Mode(GstMode),
    Toggle,
    Calc,
    Clear,
    Show,
    Rates,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            // An empty value is allowed: it blanks the field.
            "amount" => Ok(Self::Amount(rest.to_string())),
            "custom" => Ok(Self::Custom(rest.to_string())),
            "rate" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("rate"));
                }
                RateSelection::parse(rest)
                    .map(Self::Rate)
                    .ok_or_else(|| CommandError::BadRate(rest.to_string()))
            }
            "mode" => match rest {
                "" => Err(CommandError::MissingArgument("mode")),
                _ => GstMode::parse(rest)
                    .map(Self::Mode)
                    .ok_or_else(|| CommandError::BadMode(rest.to_string())),
            },
            "toggle" => Ok(Self::Toggle),
            "calc" | "calculate" => Ok(Self::Calc),
            "clear" | "reset" => Ok(Self::Clear),
            "show" => Ok(Self::Show),
            "rates" => Ok(Self::Rates),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

const SESSION_HELP: &str = "\
Commands:
  amount <value>        set the amount (blank clears it)
  rate <percent|custom> pick a preset rate or switch to a custom rate
  custom <percent>      set the custom rate (0-100)
  mode <add|remove>     add GST to, or remove GST from, the amount
  toggle                switch between add and remove
  calc                  recalculate
  show                  print the inputs, figures and base amount
  rates                 list preset rates
  clear                 reset everything
  quit                  leave";

/// Lists the configured preset rates, one per line.
pub fn render_rates(config: &Config) -> String {
    config
        .preset_rates
        .iter()
        .map(|rate| format!("{rate}%"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_notice<W: Write>(
    out: &mut W,
    notice: &Notice,
) -> Result<()> {
    debug!(duration_ms = notice.duration.as_millis() as u64, "notice");
    writeln!(out, "! {}", notice.message)?;
    Ok(())
}

fn write_base_amount<W: Write>(
    out: &mut W,
    symbol: &str,
    base_amount: Option<Decimal>,
) -> Result<()> {
    let base = base_amount.unwrap_or(Decimal::ZERO);
    writeln!(out, "Base amount:  {}", format_currency(symbol, base))?;
    Ok(())
}

/// Runs an interactive session until `quit` or end of input.
///
/// Each line is applied to the calculator and the current figures are
/// printed afterwards. Notices and unparseable lines are printed prefixed
/// with `!` and never end the session.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: &Config,
) -> Result<()> {
    let symbol = config.currency_symbol.as_str();
    let mut session = GstCalculator::with_mode(config.default_mode);
    info!(mode = %session.mode(), "session started");

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "! {e}")?;
                continue;
            }
        };
        debug!(?command, "session command");

        let notice = match command {
            SessionCommand::Amount(amount) => session.set_amount(&amount),
            SessionCommand::Rate(selection) => session.select_rate(selection),
            SessionCommand::Custom(rate) => session.set_custom_rate(&rate),
            SessionCommand::Mode(mode) => session.set_mode(mode),
            SessionCommand::Toggle => session.set_mode(session.mode().toggled()),
            SessionCommand::Calc => session.calculate(),
            SessionCommand::Clear => Some(session.clear()),
            SessionCommand::Show => {
                writeln!(out, "{}", session.form())?;
                writeln!(out, "{}", session.display(symbol))?;
                write_base_amount(&mut out, symbol, session.result().map(|r| r.base_amount))?;
                continue;
            }
            SessionCommand::Rates => {
                writeln!(out, "{}", render_rates(config))?;
                continue;
            }
            SessionCommand::Help => {
                writeln!(out, "{SESSION_HELP}")?;
                continue;
            }
            SessionCommand::Quit => break,
        };

        if let Some(notice) = &notice {
            write_notice(&mut out, notice)?;
        }
        writeln!(out, "{}", session.display(symbol))?;
    }

    out.flush()?;
    info!("session ended");
    Ok(())
}
