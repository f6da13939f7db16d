//! Core library for invoice OCR extraction.
//!
//! This crate provides:
//! - currency token normalization
//! - document overview field extraction (invoice number, date, total, vendor)
//! - two independent line-item grammars: generic invoice rows and rigid
//!   Tally-style ledger rows
//! - an orchestrator assembling everything into an [`ExtractionResult`]
//!
//! The pipeline is pure text transformation: single-threaded, synchronous,
//! no I/O, and total over its input.

pub mod error;
pub mod invoice;
pub mod models;

pub use error::{InvoscanError, OcrError, Result};
pub use invoice::rules::normalize_currency;
pub use invoice::{Analyze, InvoiceAnalyzer};
pub use models::invoice::{ExtractionResult, GenericLineItem, LedgerLineItem, Overview};
