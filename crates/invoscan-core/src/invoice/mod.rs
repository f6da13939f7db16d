//! Invoice field extraction module.

mod analyzer;
pub mod rules;

pub use analyzer::{Analyze, InvoiceAnalyzer};
