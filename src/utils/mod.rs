//! Module for additional computational capabilities
pub mod math_utils;
pub mod test_helper;
pub use math_utils::round_to_decimals;
