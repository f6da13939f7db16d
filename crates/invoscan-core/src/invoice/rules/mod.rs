//! Rule-based extractors for invoice OCR lines.

pub mod currency;
pub mod generic;
pub mod ledger;
pub mod overview;
pub mod patterns;

pub use currency::normalize_currency;
pub use generic::GenericItemRule;
pub use ledger::LedgerItemRule;
pub use overview::OverviewExtractor;

/// A per-line matching strategy for one line-item grammar.
///
/// The grammars are independent of each other: each one sees every line, and
/// a single line may satisfy zero, one, or both of them. Absence of a match
/// is a silent non-result, never an error.
pub trait LineItemRule {
    /// The record type this rule produces.
    type Item;

    /// Attempts to match one trimmed line; `None` when the line does not
    /// fit this grammar.
    fn match_line(&self, line: &str) -> Option<Self::Item>;
}
