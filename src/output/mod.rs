//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_compare_report, print_hint_report, print_score_report, print_search_report,
    print_suggested_pair,
};
