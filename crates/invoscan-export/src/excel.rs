//! Excel workbook rendering.
//!
//! Produces the three-sheet workbook downstream consumers expect:
//! "Invoice Overview" (field/value pairs), "Line Items" (only when ledger
//! rows were found) and "Raw OCR" (1-based line audit trail). Sheet names,
//! column order and widths are part of the published workbook layout.

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use invoscan_core::ExtractionResult;

use crate::error::Result;

const LEDGER_HEADERS: [&str; 8] = [
    "Product", "HSN", "Batch", "Expiry", "Quantity", "Rate", "Discount", "Amount",
];
const LEDGER_WIDTHS: [f64; 8] = [35.0, 10.0, 10.0, 10.0, 10.0, 15.0, 10.0, 15.0];

/// Renders an extraction result into an in-memory `.xlsx` workbook.
pub fn generate_workbook(result: &ExtractionResult) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Invoice Overview")?;
    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(1, 40)?;
    sheet.write_string_with_format(0, 0, "Field", &bold)?;
    sheet.write_string_with_format(0, 1, "Value", &bold)?;
    for (row, (field, value)) in result.overview.fields().into_iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, field)?;
        sheet.write_string(row, 1, value)?;
    }

    // The ledger sheet is omitted entirely when no rigid rows matched.
    if !result.ledger_items.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Line Items")?;
        for (col, (header, width)) in LEDGER_HEADERS.iter().zip(LEDGER_WIDTHS).enumerate() {
            let col = col as u16;
            sheet.set_column_width(col, width)?;
            sheet.write_string_with_format(0, col, *header, &bold)?;
        }
        for (row, item) in result.ledger_items.iter().enumerate() {
            let row = row as u32 + 1;
            sheet.write_string(row, 0, &item.product)?;
            sheet.write_string(row, 1, &item.hsn)?;
            sheet.write_string(row, 2, &item.batch)?;
            sheet.write_string(row, 3, &item.expiry)?;
            sheet.write_string(row, 4, &item.quantity)?;
            sheet.write_string(row, 5, &item.rate)?;
            sheet.write_string(row, 6, &item.discount)?;
            sheet.write_string(row, 7, &item.amount)?;
        }
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Raw OCR")?;
    sheet.set_column_width(0, 8)?;
    sheet.set_column_width(1, 100)?;
    sheet.write_string_with_format(0, 0, "Line", &bold)?;
    sheet.write_string_with_format(0, 1, "Text", &bold)?;
    for (index, line) in result.lines.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, (index + 1) as f64)?;
        sheet.write_string(row, 1, line)?;
    }

    debug!(
        "Workbook rendered: {} overview fields, {} ledger rows, {} raw lines",
        result.overview.fields().len(),
        result.ledger_items.len(),
        result.lines.len()
    );

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use invoscan_core::{Analyze, ExtractionResult, InvoiceAnalyzer};

    fn sheet_count(buffer: &[u8]) -> usize {
        // An xlsx file is a zip; counting worksheet parts avoids pulling in
        // a spreadsheet reader just for this check.
        let archive = zip::ZipArchive::new(Cursor::new(buffer)).unwrap();
        archive
            .file_names()
            .filter(|name| name.starts_with("xl/worksheets/"))
            .count()
    }

    #[test]
    fn ledger_sheet_only_when_ledger_rows_exist() {
        let analyzer = InvoiceAnalyzer::new();

        let without = analyzer.analyze("ACME SUPPLIES\nWidget A 3 $10.00 $30.00\n");
        let buffer = generate_workbook(&without).unwrap();
        assert_eq!(sheet_count(&buffer), 2);

        let with = analyzer
            .analyze("Dolo 650 Tablet 3004 AB123 08/26 10 10 15.50 14.00 12.40 5 124.00\n");
        let buffer = generate_workbook(&with).unwrap();
        assert_eq!(sheet_count(&buffer), 3);
    }

    #[test]
    fn empty_result_still_renders() {
        let result = ExtractionResult::default();
        let buffer = generate_workbook(&result).unwrap();
        assert!(!buffer.is_empty());
    }
}
