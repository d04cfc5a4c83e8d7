//! Validation outcome types.
//!
//! A failed check is NOT a fault: missing products, wrong categories, and
//! stock problems are ordinary results the caller renders to the customer.
//! They accumulate in a [`ValidationReport`] and the operation itself still
//! succeeds. Only infrastructure problems (a catalog lookup blowing up)
//! travel the error channel — see `application::error`.
//!
//! The `#[error]` strings below are the exact user-facing messages; issues
//! name products by display name wherever one could be resolved, and fall
//! back to the id only when the product was never found.

use thiserror::Error;

use crate::domain::value_objects::ProductId;

/// A blocking problem with a proposed bundle selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// No bundle offer exists for the requested bundle product (or the
    /// request was malformed — the two cases are deliberately not
    /// distinguished).
    #[error("Invalid bundle configuration")]
    InvalidBundleConfiguration,

    /// The selection does not contain exactly the required number of picks.
    #[error("Bundle requires exactly {required} products, but {selected} were selected")]
    CountMismatch { required: u32, selected: usize },

    /// A selected id did not resolve to any catalog product.
    #[error("Product {id} not found")]
    ProductNotFound { id: ProductId },

    /// The product exists but belongs to a different category than the
    /// bundle allows.
    #[error("Product \"{name}\" is not eligible for this bundle (wrong category)")]
    WrongCategory { name: String },

    /// The product exists but is not currently offered for sale.
    #[error("Product \"{name}\" is not available")]
    Inactive { name: String },

    /// Fewer units on hand than the customer requested.
    #[error("Insufficient stock for \"{name}\": {requested} requested, {available} available")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
}

/// A non-blocking advisory attached to an otherwise acceptable entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockWarning {
    /// Stock is sufficient for the request but running low.
    #[error("Low stock for \"{name}\": only {remaining} left")]
    LowStock { name: String, remaining: u32 },
}

/// The accumulated outcome of validating one selection against one bundle.
///
/// Invariant: `is_valid() ⇔ errors().is_empty()`. Warnings never affect
/// validity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<ValidationIssue>,
    warnings: Vec<StockWarning>,
}

impl ValidationReport {
    /// The short-circuit report returned when the bundle offer itself could
    /// not be resolved; no per-entry checks are attempted.
    pub fn invalid_configuration() -> Self {
        Self {
            errors: vec![ValidationIssue::InvalidBundleConfiguration],
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Blocking problems, in the order they were detected.
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Advisories, in the order they were detected.
    pub fn warnings(&self) -> &[StockWarning] {
        &self.warnings
    }

    pub(crate) fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub(crate) fn push_warning(&mut self, warning: StockWarning) {
        self.warnings.push(warning);
    }
}
