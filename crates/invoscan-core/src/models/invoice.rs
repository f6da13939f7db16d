//! Structured data extracted from one invoice OCR run.
//!
//! All values are opaque strings: the extractors check pattern conformance
//! only and never validate that a captured value is a well-formed number or
//! date. Serde renames fix the serialized keys to the published output
//! shape that downstream consumers depend on.

use serde::{Deserialize, Serialize};

/// Document-level overview fields.
///
/// Each field is claimed by the first line matching its pattern during a
/// single forward scan and is never overwritten afterwards (first-match-wins,
/// not best-match). A field that no line matched stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Invoice number/identifier.
    #[serde(rename = "Invoice Number", skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Invoice date, verbatim as it appeared in the text.
    #[serde(rename = "Invoice Date", skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    /// Total amount, currency-normalized.
    #[serde(rename = "Total Amount", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,

    /// Vendor name taken from an all-caps heading line.
    #[serde(rename = "Vendor", skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl Overview {
    /// Returns true when no field was claimed.
    pub fn is_empty(&self) -> bool {
        self.invoice_number.is_none()
            && self.invoice_date.is_none()
            && self.total_amount.is_none()
            && self.vendor.is_none()
    }

    /// Ordered `(label, value)` pairs for the claimed fields.
    ///
    /// Renderers emit fields in this fixed declaration order; unclaimed
    /// fields are omitted rather than rendered empty.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::new();
        if let Some(v) = &self.invoice_number {
            fields.push(("Invoice Number", v.as_str()));
        }
        if let Some(v) = &self.invoice_date {
            fields.push(("Invoice Date", v.as_str()));
        }
        if let Some(v) = &self.total_amount {
            fields.push(("Total Amount", v.as_str()));
        }
        if let Some(v) = &self.vendor {
            fields.push(("Vendor", v.as_str()));
        }
        fields
    }
}

/// A loosely structured invoice row: description, optional quantity, rate
/// and amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericLineItem {
    /// Product or service description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Quantity; empty when the row carried a single amount only.
    #[serde(rename = "Quantity")]
    pub quantity: String,

    /// Unit rate, currency-normalized.
    #[serde(rename = "Rate")]
    pub rate: String,

    /// Row amount, currency-normalized.
    #[serde(rename = "Amount")]
    pub amount: String,
}

/// A rigid column-positional row from a Tally-style ledger export.
///
/// All fields are positional captures from one fixed-shape pattern; no
/// normalization is applied beyond what the pattern's groups admit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLineItem {
    /// Product name.
    #[serde(rename = "Product")]
    pub product: String,

    /// HSN commodity code (4-6 digits).
    #[serde(rename = "HSN")]
    pub hsn: String,

    /// Batch identifier.
    #[serde(rename = "Batch")]
    pub batch: String,

    /// Expiry in `MM/DD` shape.
    #[serde(rename = "Expiry")]
    pub expiry: String,

    /// Quantity.
    #[serde(rename = "Quantity")]
    pub quantity: String,

    /// Unit rate.
    #[serde(rename = "Rate")]
    pub rate: String,

    /// Discount.
    #[serde(rename = "Discount")]
    pub discount: String,

    /// Row amount, possibly thousands-separated.
    #[serde(rename = "Amount")]
    pub amount: String,
}

/// Everything one extraction run produced.
///
/// Constructed once per run and never mutated afterwards; it owns all of its
/// data, so concurrent runs share nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Document-level overview fields.
    pub overview: Overview,

    /// Items matched by the generic invoice grammar, in document order.
    pub generic_items: Vec<GenericLineItem>,

    /// Items matched by the ledger grammar, in document order.
    pub ledger_items: Vec<LedgerLineItem>,

    /// All non-empty trimmed input lines, in original order (audit trail).
    pub lines: Vec<String>,
}

impl ExtractionResult {
    /// Returns true when nothing was extracted.
    ///
    /// The raw `lines` are not considered: input text that matched no
    /// pattern at all still counts as an empty result.
    pub fn is_empty(&self) -> bool {
        self.overview.is_empty() && self.generic_items.is_empty() && self.ledger_items.is_empty()
    }
}
