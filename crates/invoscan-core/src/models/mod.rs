//! Data models for extraction results.

pub mod invoice;

pub use invoice::{ExtractionResult, GenericLineItem, LedgerLineItem, Overview};
