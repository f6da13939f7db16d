//! Extraction orchestrator over OCR text.

use tracing::{debug, info};

use crate::models::invoice::ExtractionResult;

use super::rules::{GenericItemRule, LedgerItemRule, LineItemRule, OverviewExtractor};

/// Trait for OCR text analysis.
pub trait Analyze {
    /// Extract structured data from raw OCR text.
    fn analyze(&self, text: &str) -> ExtractionResult;
}

/// Heuristic invoice analyzer.
///
/// Holds no mutable state between calls; every run allocates fresh data, so
/// concurrent invocations are safe.
pub struct InvoiceAnalyzer {
    generic: GenericItemRule,
    ledger: LedgerItemRule,
}

impl InvoiceAnalyzer {
    pub fn new() -> Self {
        Self {
            generic: GenericItemRule,
            ledger: LedgerItemRule,
        }
    }
}

impl Default for InvoiceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyze for InvoiceAnalyzer {
    /// Total over its input: empty or pattern-free text yields an
    /// empty-but-valid result, never an error.
    fn analyze(&self, text: &str) -> ExtractionResult {
        info!("Analyzing {} characters of OCR text", text.len());

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        // First pass: overview fields and generic items share one traversal.
        let mut overview = OverviewExtractor::new();
        let mut generic_items = Vec::new();
        for line in &lines {
            overview.observe(line);
            if let Some(item) = self.generic.match_line(line) {
                generic_items.push(item);
            }
        }

        // Second pass: the rigid ledger grammar over the same lines.
        let ledger_items: Vec<_> = lines
            .iter()
            .filter_map(|line| self.ledger.match_line(line))
            .collect();

        debug!(
            "Extracted {} generic and {} ledger items from {} lines",
            generic_items.len(),
            ledger_items.len(),
            lines.len()
        );

        ExtractionResult {
            overview: overview.finish(),
            generic_items,
            ledger_items,
            lines,
        }
    }
}
