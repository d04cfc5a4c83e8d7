//! Bundly Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Bundly
//! storefront bundle toolkit, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      bundly-cli (CLI / route layer)     │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (BundleService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Catalog)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     bundly-adapters (Infrastructure)    │
//! │     (InMemoryCatalog, JsonCatalog)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Product, BundleOffer, SelectionRules) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bundly_core::{
//!     application::BundleService,
//!     domain::{ProductId, Selection},
//! };
//!
//! // 1. Build a selection (duplicates mean multiple units)
//! let bundle = ProductId::new("gift-set").unwrap();
//! let selection = Selection::new(vec![
//!     ProductId::new("soap").unwrap(),
//!     ProductId::new("soap").unwrap(),
//!     ProductId::new("oil").unwrap(),
//! ]);
//!
//! // 2. Use the application service (with an injected catalog adapter)
//! let service = BundleService::new(catalog); // impl Catalog
//! let report = service.validate_selection(&bundle, &selection).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BundleService, PriceQuote,
        ports::{Catalog, ProductFilter},
    };
    pub use crate::domain::{
        BundleOffer, Category, Price, Product, ProductId, Selection, StockWarning,
        ValidationIssue, ValidationReport,
    };
    pub use crate::error::{BundlyError, BundlyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
