//! GST calculation logic.

pub mod common;
pub mod gst;

pub use gst::{MAX_CUSTOM_RATE, TaxCalculator, ValidationError};
