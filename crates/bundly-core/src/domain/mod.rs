// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Bundly.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All catalog access happens via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + rust_decimal
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Centralized rules**: Selection rules live in `validation`, not in
//!   entities or services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod report;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{BundleOffer, Product, Selection};

pub use error::{DomainError, ErrorCategory};

pub use report::{StockWarning, ValidationIssue, ValidationReport};

pub use validation::{LOW_STOCK_THRESHOLD, LineOutcome, SelectionRules};

pub use value_objects::{Category, Price, ProductId};
