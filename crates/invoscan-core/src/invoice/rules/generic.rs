//! Generic invoice line items: description, quantity, rate, amount.

use crate::models::invoice::GenericLineItem;

use super::currency::normalize_currency;
use super::patterns::{ITEM_AMOUNT_ONLY, ITEM_QTY_RATE_AMOUNT, TOTAL_KEYWORD};
use super::LineItemRule;

/// Matches loosely structured invoice rows.
///
/// Tries the four-field form first, unconditionally, then the
/// trailing-amount fallback. The fallback alone skips summary lines
/// (total / amount due / grand total): those belong to the overview pass,
/// and only the loose fallback shape would mistake one for an item.
pub struct GenericItemRule;

impl LineItemRule for GenericItemRule {
    type Item = GenericLineItem;

    fn match_line(&self, line: &str) -> Option<GenericLineItem> {
        if let Some(caps) = ITEM_QTY_RATE_AMOUNT.captures(line) {
            return Some(GenericLineItem {
                description: caps[1].to_string(),
                quantity: caps[2].to_string(),
                rate: normalize_currency(&caps[3]),
                amount: normalize_currency(&caps[4]),
            });
        }

        if TOTAL_KEYWORD.is_match(line) {
            return None;
        }

        let caps = ITEM_AMOUNT_ONLY.captures(line)?;
        let amount = normalize_currency(&caps[2]);
        // Known heuristic limitation: with no quantity/rate breakdown the
        // single amount fills both rate and amount. Part of the published
        // output shape.
        Some(GenericLineItem {
            description: caps[1].to_string(),
            quantity: String::new(),
            rate: amount.clone(),
            amount,
        })
    }
}
