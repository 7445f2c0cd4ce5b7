//! Report export as CSV and JSON.

mod report;

pub use report::*;
