//! End-to-end extraction tests over whole OCR text blobs.

use pretty_assertions::assert_eq;

use invoscan_core::{Analyze, InvoiceAnalyzer, GenericLineItem, Overview};

#[test]
fn end_to_end_generic_invoice() {
    let text = "\
ACME SUPPLIES
Invoice No: INV2024
Date: 12/05/2024
Widget A 3 $10.00 $30.00
Grand Total: $30.00
";

    let result = InvoiceAnalyzer::new().analyze(text);

    assert_eq!(
        result.overview,
        Overview {
            invoice_number: Some("INV2024".to_string()),
            invoice_date: Some("12/05/2024".to_string()),
            total_amount: Some("30.00".to_string()),
            vendor: Some("ACME SUPPLIES".to_string()),
        }
    );

    assert_eq!(
        result.generic_items,
        vec![GenericLineItem {
            description: "Widget A".to_string(),
            quantity: "3".to_string(),
            rate: "10.00".to_string(),
            amount: "30.00".to_string(),
        }]
    );

    assert!(result.ledger_items.is_empty());
    assert_eq!(result.lines.len(), 5);
}

#[test]
fn ledger_rows_are_found_in_second_pass() {
    let text = "\
SRI MEDICAL DISTRIBUTORS
Dolo 650 Tablet 3004 AB123 08/26 10 10 15.50 14.00 12.40 5 124.00
Amoxicillin 250 300490 XR77 01/27 100 0 18.00 17.50 16.25 2 1,625.00
";

    let result = InvoiceAnalyzer::new().analyze(text);

    assert_eq!(result.ledger_items.len(), 2);
    assert_eq!(result.ledger_items[0].product, "Dolo 650 Tablet");
    assert_eq!(result.ledger_items[1].amount, "1,625.00");
    assert_eq!(result.overview.vendor.as_deref(), Some("SRI MEDICAL DISTRIBUTORS"));
}

#[test]
fn one_line_can_satisfy_both_grammars() {
    let line = "Dolo 650 Tablet 3004 AB123 08/26 10 10 15.50 14.00 12.40 5 124.00";
    let result = InvoiceAnalyzer::new().analyze(line);

    // The grammars are independent: the same line yields both a ledger row
    // and a (loosely interpreted) generic row.
    assert_eq!(result.ledger_items.len(), 1);
    assert_eq!(result.generic_items.len(), 1);
}

#[test]
fn raw_lines_preserve_trimmed_non_empty_input() {
    let text = "  ACME SUPPLIES  \n\n\t\nWidget A 3 $10.00 $30.00\r\n   \nThank you\n";
    let result = InvoiceAnalyzer::new().analyze(text);

    assert_eq!(
        result.lines,
        vec![
            "ACME SUPPLIES".to_string(),
            "Widget A 3 $10.00 $30.00".to_string(),
            "Thank you".to_string(),
        ]
    );
}

#[test]
fn empty_input_yields_empty_result() {
    for text in ["", "\n \n\t\n"] {
        let result = InvoiceAnalyzer::new().analyze(text);
        assert!(result.is_empty());
        assert!(result.lines.is_empty());
    }
}

#[test]
fn unstructured_text_contributes_nothing() {
    let result = InvoiceAnalyzer::new().analyze("some handwriting\nnothing to see\n");
    assert!(result.is_empty());
    assert_eq!(result.lines.len(), 2);
}

#[test]
fn result_serializes_with_published_keys() {
    let text = "Invoice No: INV2024\nWidget A 3 $10.00 $30.00\n";
    let result = InvoiceAnalyzer::new().analyze(text);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["overview"]["Invoice Number"], "INV2024");
    assert_eq!(json["generic_items"][0]["Description"], "Widget A");
    assert_eq!(json["lines"][0], "Invoice No: INV2024");
}
