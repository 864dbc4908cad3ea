//! Terminal output formatting
//!
//! Display utilities for CLI results and the verdict title/message mapping.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_solve_report};
