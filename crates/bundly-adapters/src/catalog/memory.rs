//! Thread-safe in-memory catalog.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use bundly_core::{
    application::ports::{Catalog, ProductFilter},
    domain::{BundleOffer, Product, ProductId},
    error::BundlyResult,
};

use crate::seed_catalog;

#[derive(Default)]
struct CatalogState {
    products: HashMap<ProductId, Product>,
    /// Insertion order of product ids; listings replay this so "catalog
    /// order" is stable rather than hash order.
    order: Vec<ProductId>,
    offers: HashMap<ProductId, BundleOffer>,
}

/// Thread-safe in-memory catalog.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogState::default())),
        }
    }

    /// Create a catalog seeded with the built-in demo storefront.
    pub fn with_seed() -> BundlyResult<Self> {
        let catalog = Self::new();
        catalog.load_seed()?;
        Ok(catalog)
    }

    /// Load the built-in demo products and bundle offers.
    pub fn load_seed(&self) -> BundlyResult<()> {
        for product in seed_catalog::products()? {
            self.insert_product(product)?;
        }
        for offer in seed_catalog::offers()? {
            self.insert_offer(offer)?;
        }
        Ok(())
    }

    /// Insert or replace a product. Re-validates the entity first so
    /// deserialized records cannot smuggle in inconsistent data.
    pub fn insert_product(&self, product: Product) -> BundlyResult<()> {
        product.validate()?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| bundly_core::application::ApplicationError::CatalogLockError)?;

        let id = product.id().clone();
        if inner.products.insert(id.clone(), product).is_none() {
            inner.order.push(id);
        }
        Ok(())
    }

    /// Insert or replace a bundle offer.
    pub fn insert_offer(&self, offer: BundleOffer) -> BundlyResult<()> {
        offer.validate()?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| bundly_core::application::ApplicationError::CatalogLockError)?;

        inner
            .offers
            .insert(offer.bundle_product_id().clone(), offer);
        Ok(())
    }

    /// Get the number of products.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all products and offers.
    pub fn clear(&self) -> BundlyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| bundly_core::application::ApplicationError::CatalogLockError)?;
        inner.products.clear();
        inner.order.clear();
        inner.offers.clear();
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for InMemoryCatalog {
    fn bundle_offer(&self, bundle_product_id: &ProductId) -> BundlyResult<Option<BundleOffer>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| bundly_core::application::ApplicationError::CatalogLockError)?;

        Ok(inner.offers.get(bundle_product_id).cloned())
    }

    fn product(&self, product_id: &ProductId) -> BundlyResult<Option<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| bundly_core::application::ApplicationError::CatalogLockError)?;

        Ok(inner.products.get(product_id).cloned())
    }

    fn products(&self, filter: &ProductFilter) -> BundlyResult<Vec<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| bundly_core::application::ApplicationError::CatalogLockError)?;

        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.products.get(id))
            .filter(|p| p.category() == &filter.category)
            .filter(|p| !filter.in_stock || p.in_stock())
            .cloned()
            .collect())
    }
}
