use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gst_core::{GstMode, Notice};
use tracing::{debug, info};

use gst_cli::commands;
use gst_cli::config::Config;
use gst_cli::logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// GST calculator.
///
/// Adds GST to a pre-tax amount or removes it from a tax-inclusive one, and
/// shows the total, the GST and its CGST/SGST halves.
#[derive(Debug, Parser)]
#[command(name = "gst-calc", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `gst_core=trace`. `RUST_LOG` wins when set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate once and print the result.
    Calc {
        /// Amount; pre-tax when adding GST, tax-inclusive when removing it.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Preset GST rate in percent.
        #[arg(long, conflicts_with = "custom_rate", allow_hyphen_values = true)]
        rate: Option<String>,

        /// Free-form GST rate in percent, between 0 and 100.
        #[arg(long, allow_hyphen_values = true)]
        custom_rate: Option<String>,

        /// `add` or `remove`. Defaults to the configured mode.
        #[arg(long, value_parser = parse_mode)]
        mode: Option<GstMode>,

        /// Print JSON including the unrounded figures and base amount.
        #[arg(long)]
        json: bool,
    },

    /// Interactive calculator reading commands from stdin.
    Session,

    /// List the preset GST rates.
    Rates,
}

fn parse_mode(s: &str) -> Result<GstMode, String> {
    GstMode::parse(s).ok_or_else(|| format!("'{s}' is not a mode; use 'add' or 'remove'"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())?;

    logging::init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Calc {
            amount,
            rate,
            custom_rate,
            mode,
            json,
        } => {
            let mode = mode.unwrap_or(config.default_mode);
            let outcome = commands::build_form(&amount, rate.as_deref(), custom_rate.as_deref(), mode)
                .and_then(|form| commands::calculate(&form).map(|result| (form, result)));

            match outcome {
                Ok((form, result)) => {
                    info!(%mode, "calculation succeeded");
                    println!("{}", commands::render_result(&form, &result, &config, json)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(error) => {
                    let notice = Notice::from(error);
                    eprintln!("{}", notice.message);
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Session => {
            commands::run_session(io::stdin().lock(), io::stdout().lock(), &config)
                .context("session failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Rates => {
            println!("{}", commands::render_rates(&config));
            Ok(ExitCode::SUCCESS)
        }
    }
}
