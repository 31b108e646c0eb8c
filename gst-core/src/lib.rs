pub mod calculations;
pub mod display;
pub mod form;
pub mod models;
pub mod session;
pub mod utils;

pub use calculations::{TaxCalculator, ValidationError};
pub use display::{DEFAULT_CURRENCY_SYMBOL, ResultDisplay, format_currency};
pub use form::GstForm;
pub use models::*;
pub use session::{GstCalculator, Notice};
