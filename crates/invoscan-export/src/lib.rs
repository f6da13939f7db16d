//! Rendering collaborators for extraction results.
//!
//! Turns an [`invoscan_core::ExtractionResult`] into the downloadable
//! artifacts: an Excel workbook, a plain-text summary, and a zip bundle of
//! both. The extraction core stays pure; everything fallible lives here.

mod archive;
mod error;
mod excel;
mod report;

pub use archive::bundle;
pub use error::{ExportError, Result};
pub use excel::generate_workbook;
pub use report::generate_report;
