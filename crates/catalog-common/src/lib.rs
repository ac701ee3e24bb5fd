//! Shared utilities for the catalog cleaner crates.

mod values;

pub use values::{
    any_to_optional_string, any_to_whole_i64, format_numeric, parse_whole_i64,
};
