mod calculation;
mod gst_mode;
mod rate;

pub use calculation::{CalculationInput, CalculationResult};
pub use gst_mode::GstMode;
pub use rate::{RateSelection, RateSource, standard_rates};
