//! Plain-text summary report.
//!
//! Lists the overview fields, then the generic line items, one row per
//! line in the fixed `desc | Qty | Rate | Amount` shape.

use invoscan_core::ExtractionResult;

/// Renders an extraction result into a textual summary document.
pub fn generate_report(result: &ExtractionResult) -> String {
    let mut out = String::new();

    out.push_str("Invoice Summary\n");
    out.push_str("===============\n\n");
    for (field, value) in result.overview.fields() {
        out.push_str(field);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }

    out.push_str("\nLine Items\n");
    out.push_str("==========\n\n");
    for item in &result.generic_items {
        out.push_str(&format!(
            "{} | Qty: {} | Rate: {} | Amount: {}\n",
            item.description, item.quantity, item.rate, item.amount
        ));
    }

    out
}
