//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bundly-adapters` crate provides implementations.

use crate::domain::{BundleOffer, Category, Product, ProductId};
use crate::error::BundlyResult;

/// Filter for catalog product listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Only products in this category.
    pub category: Category,
    /// Only products with at least one unit on hand.
    pub in_stock: bool,
}

/// Port for catalog lookups.
///
/// Implemented by:
/// - `bundly_adapters::catalog::InMemoryCatalog` (seeded / testing)
/// - `bundly_adapters::catalog::JsonCatalog` (catalog files)
///
/// ## Design Notes
///
/// - `Ok(None)` is the not-found outcome — a normal answer the validation
///   rules turn into customer-facing issues. `Err(_)` means the catalog
///   itself failed and the whole operation fails with it.
/// - Lookups are synchronous and performed one at a time; the service never
///   batches them (async-ready — can be extended with async-trait later).
/// - Implementations must never be mutated by this crate; every port method
///   is a read.
#[cfg_attr(test, mockall::automock)]
pub trait Catalog: Send + Sync {
    /// Resolve the bundle offer sold under the given product id.
    fn bundle_offer(&self, bundle_product_id: &ProductId) -> BundlyResult<Option<BundleOffer>>;

    /// Resolve a single product by id.
    fn product(&self, product_id: &ProductId) -> BundlyResult<Option<Product>>;

    /// List products matching a filter, in catalog order.
    fn products(&self, filter: &ProductFilter) -> BundlyResult<Vec<Product>>;
}
