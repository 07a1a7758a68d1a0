//! Display formatting for the fixed `pt-BR` locale.

pub mod currency;
pub mod date;

pub use currency::format_currency;
pub use date::{display_date, display_naive_date, input_date, today_input_value};
