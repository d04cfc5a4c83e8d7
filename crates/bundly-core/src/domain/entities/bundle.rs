//! The `BundleOffer` entity.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Category, ProductId},
};

/// Immutable description of a bundle offer.
///
/// A bundle is itself a sellable product (`bundle_product_id` resolves to an
/// ordinary [`Product`](super::Product) whose listed price is the bundle
/// price). The offer fixes which category the customer may pick from and
/// exactly how many picks a purchase must contain. Picking the same product
/// more than once is allowed and means buying multiple units of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleOffer {
    bundle_product_id: ProductId,
    allowed_category: Category,
    required_quantity: u32,
}

impl BundleOffer {
    pub fn new(
        bundle_product_id: ProductId,
        allowed_category: Category,
        required_quantity: u32,
    ) -> Result<Self, DomainError> {
        let offer = Self {
            bundle_product_id,
            allowed_category,
            required_quantity,
        };
        offer.validate()?;
        Ok(offer)
    }

    pub const fn bundle_product_id(&self) -> &ProductId {
        &self.bundle_product_id
    }
    pub const fn allowed_category(&self) -> &Category {
        &self.allowed_category
    }
    pub const fn required_quantity(&self) -> u32 {
        self.required_quantity
    }

    /// Validate this offer's internal consistency.
    ///
    /// Available for re-validation after deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.required_quantity == 0 {
            return Err(DomainError::EmptyOffer {
                id: self.bundle_product_id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_requires_at_least_one_pick() {
        let result = BundleOffer::new(
            ProductId::new("gift-set").unwrap(),
            Category::new("lavender").unwrap(),
            0,
        );
        assert!(matches!(result, Err(DomainError::EmptyOffer { .. })));
    }

    #[test]
    fn valid_offer_exposes_fields() {
        let offer = BundleOffer::new(
            ProductId::new("gift-set").unwrap(),
            Category::new("lavender").unwrap(),
            3,
        )
        .unwrap();
        assert_eq!(offer.required_quantity(), 3);
        assert_eq!(offer.allowed_category().as_str(), "lavender");
    }
}
