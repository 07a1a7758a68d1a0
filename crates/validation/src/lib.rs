//! Pure form/value validators.
//!
//! Nothing in here allocates state or performs IO; every function is a
//! deterministic predicate over its input.

pub mod fields;
pub mod id_number;

pub use fields::{is_empty_field, is_positive_number, is_valid_email, parse_positive_number};
pub use id_number::{check_digits, format_id_number, is_valid_id_number};
