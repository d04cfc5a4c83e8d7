//! JSON catalog file loading.
//!
//! Parses a catalog document into a ready-to-use [`InMemoryCatalog`]. This is
//! how the CLI consumes merchandising exports; a deployment backed by a real
//! catalog service would implement the `Catalog` port directly instead.
//!
//! # File format
//!
//! ```json
//! {
//!   "products": [
//!     {
//!       "id": "lavender-soap",
//!       "name": "Lavender Soap Bar",
//!       "category": "lavender",
//!       "price": "8.99",
//!       "stock": 24,
//!       "active": true
//!     }
//!   ],
//!   "bundles": [
//!     {
//!       "bundle_product_id": "lavender-gift-set",
//!       "allowed_category": "lavender",
//!       "required_quantity": 3
//!     }
//!   ]
//! }
//! ```
//!
//! Prices are JSON strings so that amounts survive round-trips exactly.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use bundly_core::{
    domain::{BundleOffer, Product},
    error::{BundlyError, BundlyResult},
};

use crate::catalog::memory::InMemoryCatalog;

/// Deserialised representation of a catalog file.
///
/// Both sections are optional; an empty document is a valid (empty) catalog.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub bundles: Vec<BundleOffer>,
}

impl CatalogFile {
    /// Parse a catalog document from a JSON string.
    pub fn parse(raw: &str) -> BundlyResult<Self> {
        serde_json::from_str(raw).map_err(|e| BundlyError::Configuration {
            message: format!("invalid catalog document: {e}"),
        })
    }

    /// Read and parse a catalog file from disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> BundlyResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| BundlyError::Configuration {
            message: format!("failed to read catalog file '{}': {e}", path.display()),
        })?;
        Self::parse(&raw)
    }

    /// Build an [`InMemoryCatalog`] from this document.
    ///
    /// Records that fail entity validation are skipped with a `WARN` log
    /// rather than failing the whole catalog — one bad row must not take the
    /// storefront down.
    pub fn into_catalog(self) -> BundlyResult<InMemoryCatalog> {
        let catalog = InMemoryCatalog::new();

        for product in self.products {
            let id = product.id().clone();
            if let Err(e) = catalog.insert_product(product) {
                warn!(product = %id, error = %e, "skipping invalid catalog product");
            }
        }
        for offer in self.bundles {
            let id = offer.bundle_product_id().clone();
            if let Err(e) = catalog.insert_offer(offer) {
                warn!(bundle = %id, error = %e, "skipping invalid bundle offer");
            }
        }

        debug!(products = catalog.len(), "catalog document loaded");
        Ok(catalog)
    }
}

/// One-shot convenience: read, parse, and build a catalog from a file path.
pub fn load_catalog(path: impl AsRef<Path>) -> BundlyResult<InMemoryCatalog> {
    CatalogFile::load(path)?.into_catalog()
}
