//! Tally-style ledger line items with fixed numeric columns.

use crate::models::invoice::LedgerLineItem;

use super::patterns::LEDGER_ROW;
use super::LineItemRule;

/// Matches rigid column-positional ledger export rows.
///
/// The row either satisfies the entire fixed shape or contributes nothing;
/// there is no partial credit. Runs independently of the generic grammar, so
/// a single line can in principle satisfy both.
pub struct LedgerItemRule;

impl LineItemRule for LedgerItemRule {
    type Item = LedgerLineItem;

    fn match_line(&self, line: &str) -> Option<LedgerLineItem> {
        let caps = LEDGER_ROW.captures(line)?;
        Some(LedgerLineItem {
            product: caps[1].to_string(),
            hsn: caps[2].to_string(),
            batch: caps[3].to_string(),
            expiry: caps[4].to_string(),
            quantity: caps[5].to_string(),
            rate: caps[6].to_string(),
            discount: caps[7].to_string(),
            amount: caps[8].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_ROW: &str = "Dolo 650 Tablet 3004 AB123 08/26 10 10 15.50 14.00 12.40 5 124.00";

    #[test]
    fn full_row_matches_positionally() {
        let item = LedgerItemRule.match_line(FULL_ROW).unwrap();
        assert_eq!(
            item,
            LedgerLineItem {
                product: "Dolo 650 Tablet".to_string(),
                hsn: "3004".to_string(),
                batch: "AB123".to_string(),
                expiry: "08/26".to_string(),
                quantity: "10".to_string(),
                rate: "12.40".to_string(),
                discount: "5".to_string(),
                amount: "124.00".to_string(),
            }
        );
    }

    #[test]
    fn thousands_separated_amount() {
        let line = "Amoxicillin 250 300490 XR77 01/27 100 0 18.00 17.50 16.25 2 1,625.00";
        let item = LedgerItemRule.match_line(line).unwrap();
        assert_eq!(item.amount, "1,625.00");
        assert_eq!(item.hsn, "300490");
    }

    #[test]
    fn rejects_rows_missing_columns() {
        // Seven tokens instead of the full column set: no partial credit.
        assert_eq!(
            LedgerItemRule.match_line("Dolo 650 3004 AB123 08/26 10 15.50 124.00"),
            None
        );
        assert_eq!(LedgerItemRule.match_line("Widget A 3 $10.00 $30.00"), None);
    }
}
