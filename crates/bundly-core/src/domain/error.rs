// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Construction Errors (400-level equivalent)
    // ========================================================================
    #[error("identifier cannot be blank")]
    BlankIdentifier,

    #[error("category cannot be blank")]
    BlankCategory,

    #[error("product '{id}' has no display name")]
    BlankProductName { id: String },

    #[error("product '{id}' has a negative price: {price}")]
    NegativePrice { id: String, price: String },

    #[error("bundle offer for '{id}' requires zero products")]
    EmptyOffer { id: String },

    #[error("requested quantity for '{id}' must be at least 1")]
    ZeroQuantity { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BlankIdentifier => vec![
                "Product identifiers must contain at least one non-whitespace character".into(),
            ],
            Self::BlankCategory => {
                vec!["Category names must contain at least one non-whitespace character".into()]
            }
            Self::BlankProductName { id } => vec![
                format!("Product '{}' needs a display name", id),
                "Display names appear in validation messages shown to customers".into(),
            ],
            Self::NegativePrice { id, .. } => vec![
                format!("Check the catalog entry for '{}'", id),
                "Listed prices must be zero or positive".into(),
            ],
            Self::EmptyOffer { id } => vec![
                format!("Bundle '{}' must require at least one product", id),
                "Set required_quantity to 1 or more".into(),
            ],
            Self::ZeroQuantity { id } => vec![
                format!("Remove '{}' from the selection instead of requesting 0 units", id),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BlankIdentifier
            | Self::BlankCategory
            | Self::BlankProductName { .. }
            | Self::NegativePrice { .. }
            | Self::EmptyOffer { .. }
            | Self::ZeroQuantity { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
