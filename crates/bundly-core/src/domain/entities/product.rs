//! The `Product` entity.
//!
//! A `Product` is the catalog's view of one sellable item: identity, display
//! name, the single category it belongs to, its listed price, current stock,
//! and whether it is currently offered for sale. Bundle products are ordinary
//! products too — their listed price is what a bundle purchase costs.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Category, Price, ProductId},
};

/// A catalog product.
///
/// Constructed via [`Product::new`], which enforces:
/// - a non-blank display name (error messages name products, not ids)
/// - a non-negative listed price
///
/// Stock is a plain count; `0` means sold out, it does not mean delisted —
/// that is what `is_active` is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Price,
    stock: u32,
    #[serde(rename = "active")]
    is_active: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Price,
        stock: u32,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let product = Self {
            id,
            name: name.into(),
            category,
            price,
            stock,
            is_active,
        };
        product.validate()?;
        Ok(product)
    }

    pub const fn id(&self) -> &ProductId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn category(&self) -> &Category {
        &self.category
    }
    pub const fn price(&self) -> Price {
        self.price
    }
    pub const fn stock(&self) -> u32 {
        self.stock
    }
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether this product currently has any units on hand.
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Validate this product's internal consistency.
    ///
    /// Called automatically by [`Product::new`]. Available for re-validation
    /// after deserialization (catalog files bypass the constructor).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::BlankProductName {
                id: self.id.to_string(),
            });
        }
        if self.price.is_negative() {
            return Err(DomainError::NegativePrice {
                id: self.id.to_string(),
                price: self.price.to_string(),
            });
        }
        Ok(())
    }
}
