//! Application layer errors.
//!
//! These errors represent infrastructure faults during orchestration, not
//! business outcomes. A selection failing validation is NOT an error — it is
//! a `ValidationReport` carrying issues. Only a catalog that cannot answer at
//! all lands here.

use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A catalog lookup failed unexpectedly.
    ///
    /// Carries the lookup kind and the original cause as a structured value
    /// rather than interpolating the fault into the message text, so callers
    /// can distinguish fault categories without string matching.
    #[error("Catalog lookup failed for {entity} '{id}'")]
    LookupFailed {
        entity: &'static str,
        id: String,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Catalog access failed (lock poisoned, etc.).
    #[error("Catalog store error")]
    CatalogLockError,

    /// No bundle offer is registered for the given product id.
    ///
    /// Only produced by the operations that have no report type to carry
    /// the outcome (eligible products, pricing); selection validation
    /// reports `Invalid bundle configuration` instead.
    #[error("No bundle offer registered for product '{id}'")]
    UnknownBundle { id: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LookupFailed { entity, id, .. } => vec![
                format!("The catalog failed while resolving {} '{}'", entity, id),
                "Check that the catalog source is reachable and well-formed".into(),
            ],
            Self::CatalogLockError => vec![
                "The catalog is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::UnknownBundle { id } => vec![
                format!("No bundle offer exists for product '{}'", id),
                "List bundles in your catalog file under \"bundles\"".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LookupFailed { .. } => ErrorCategory::Internal,
            Self::CatalogLockError => ErrorCategory::Internal,
            Self::UnknownBundle { .. } => ErrorCategory::NotFound,
        }
    }
}
