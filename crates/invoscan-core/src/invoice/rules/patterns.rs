//! Regex patterns for invoice OCR extraction.
//!
//! The patterns are fixed: downstream consumers depend on the exact capture
//! behavior, including its documented quirks, so changes here change the
//! published output shape.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Overview fields

    /// Gates a line as carrying the invoice number. The keyword only
    /// qualifies the line; the value itself is taken with [`LAST_WORD`].
    pub static ref INVOICE_NUMBER_LINE: Regex = Regex::new(
        r"(?i)invoice\s*(?:no|#)?\s*[:\-]?\s*\w+"
    ).unwrap();

    /// Trailing word run of a line. Known heuristic limitation: on a line
    /// like `Invoice No: INV2024 Page` this captures `Page`, not the token
    /// next to the keyword. Kept as-is for output compatibility.
    pub static ref LAST_WORD: Regex = Regex::new(r"(\w+)$").unwrap();

    /// Date-like substring: day/month 1-2 digits, year 2 or 4 digits,
    /// separated by `/` or `-`.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}"
    ).unwrap();

    /// Summary-line keywords claiming the total amount.
    pub static ref TOTAL_KEYWORD: Regex = Regex::new(
        r"(?i)(?:total|amount due|grand total)"
    ).unwrap();

    /// First numeric token on a line, optionally currency-prefixed.
    pub static ref AMOUNT_TOKEN: Regex = Regex::new(
        r"[\$₹€]?\s*[\d,.]+"
    ).unwrap();

    /// All-caps heading line of at least 4 characters, the heuristic for a
    /// printed company-name header.
    pub static ref VENDOR_LINE: Regex = Regex::new(
        r"^[A-Z][A-Z\s&]{3,}$"
    ).unwrap();

    // Line-item grammars

    /// Generic four-field row: description, integer quantity, rate and
    /// amount with exactly two fractional digits.
    pub static ref ITEM_QTY_RATE_AMOUNT: Regex = Regex::new(
        r"(.+?)\s+(\d+)\s+([\$₹€]?\d+[.,]\d{2})\s+([\$₹€]?\d+[.,]\d{2})"
    ).unwrap();

    /// Generic fallback row: description plus a single trailing amount.
    pub static ref ITEM_AMOUNT_ONLY: Regex = Regex::new(
        r"(.+?)\s+([\$₹€]?\d+[.,]\d{2})$"
    ).unwrap();

    /// Tally-style ledger row: product, HSN, batch, expiry, quantity,
    /// then a fixed run of numeric columns of which only rate, discount
    /// and amount are captured. All-or-nothing; a line missing any column
    /// does not match.
    pub static ref LEDGER_ROW: Regex = Regex::new(
        r"(.+?)\s+(\d{4,6})\s+(\w+)\s+(\d{2}/\d{2})\s+(\d+)\s+\d+\s+[\d.]+\s+[\d.]+\s+([\d.]+)\s+(\d+)\s+([\d,.]+)"
    ).unwrap();
}
