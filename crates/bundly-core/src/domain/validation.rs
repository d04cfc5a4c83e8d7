//! Centralized selection rules.
//!
//! All per-selection business rules live here, not scattered across entities
//! or the service. The service resolves products through its catalog port and
//! hands each resolved line to [`SelectionRules`]; everything below is pure.

use crate::domain::{
    entities::{BundleOffer, Product, Selection},
    report::{StockWarning, ValidationIssue},
};

/// Stock level at or below which a sufficient line still earns a low-stock
/// advisory. Business constant; not tunable per bundle or catalog.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Outcome of checking a single selection entry against an offer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineOutcome {
    pub errors: Vec<ValidationIssue>,
    pub warning: Option<StockWarning>,
}

/// Centralized selection validation.
pub struct SelectionRules;

impl SelectionRules {
    /// The selection must contain exactly the offer's required number of
    /// picks. Returns the issue rather than appending it so the caller
    /// controls accumulation order.
    pub fn check_count(offer: &BundleOffer, selection: &Selection) -> Option<ValidationIssue> {
        let required = offer.required_quantity();
        let selected = selection.len();
        if selected != required as usize {
            return Some(ValidationIssue::CountMismatch { required, selected });
        }
        None
    }

    /// Check one resolved selection entry: category, availability, stock.
    ///
    /// All three checks run — a line can fail category AND be inactive AND
    /// be short on stock, and every problem is reported. The stock outcomes
    /// are the only mutually exclusive pair: a line either fails the
    /// sufficiency check or (when stock is positive and at or below
    /// [`LOW_STOCK_THRESHOLD`]) earns the low-stock advisory, never both.
    /// Sold-out products therefore never warn; they always error.
    pub fn check_line(offer: &BundleOffer, product: &Product, requested: u32) -> LineOutcome {
        let mut outcome = LineOutcome::default();

        if product.category() != offer.allowed_category() {
            outcome.errors.push(ValidationIssue::WrongCategory {
                name: product.name().to_owned(),
            });
        }

        if !product.is_active() {
            outcome.errors.push(ValidationIssue::Inactive {
                name: product.name().to_owned(),
            });
        }

        let available = product.stock();
        if available < requested {
            outcome.errors.push(ValidationIssue::InsufficientStock {
                name: product.name().to_owned(),
                requested,
                available,
            });
        } else if available > 0 && available <= LOW_STOCK_THRESHOLD {
            outcome.warning = Some(StockWarning::LowStock {
                name: product.name().to_owned(),
                remaining: available,
            });
        }

        outcome
    }
}
