//! Document-level overview field extraction.

use crate::models::invoice::Overview;

use super::currency::normalize_currency;
use super::patterns::{
    AMOUNT_TOKEN, DATE_DMY, INVOICE_NUMBER_LINE, LAST_WORD, TOTAL_KEYWORD, VENDOR_LINE,
};

/// Single-pass overview extractor with first-match-wins field claiming.
///
/// Feed lines in document order via [`observe`](Self::observe); each field is
/// claimed by the first line matching its pattern and never overwritten.
/// All four predicates run on every line regardless of the others' state, so
/// one line can claim a field and still be a line-item candidate elsewhere.
pub struct OverviewExtractor {
    overview: Overview,
}

impl OverviewExtractor {
    pub fn new() -> Self {
        Self {
            overview: Overview::default(),
        }
    }

    /// Evaluates one trimmed, non-empty line against all unclaimed fields.
    pub fn observe(&mut self, line: &str) {
        if self.overview.invoice_number.is_none() && INVOICE_NUMBER_LINE.is_match(line) {
            // The value is the line's trailing word run, not the token next
            // to the keyword (see LAST_WORD). A line with no trailing word
            // run still claims the field, with an empty value.
            let number = LAST_WORD
                .captures(line)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default();
            self.overview.invoice_number = Some(number);
        }

        if self.overview.invoice_date.is_none() {
            if let Some(m) = DATE_DMY.find(line) {
                self.overview.invoice_date = Some(m.as_str().to_string());
            }
        }

        if self.overview.total_amount.is_none() && TOTAL_KEYWORD.is_match(line) {
            let token = AMOUNT_TOKEN.find(line).map(|m| m.as_str()).unwrap_or("");
            self.overview.total_amount = Some(normalize_currency(token));
        }

        if self.overview.vendor.is_none() && VENDOR_LINE.is_match(line) {
            self.overview.vendor = Some(line.to_string());
        }
    }

    /// Consumes the extractor, returning whatever was claimed.
    pub fn finish(self) -> Overview {
        self.overview
    }
}

impl Default for OverviewExtractor {
    fn default() -> Self {
        Self::new()
    }
}
