//! The `Selection` entity — a customer's proposed fill for a bundle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ProductId};

/// The customer's chosen multiset of products for a bundle purchase.
///
/// Order is preserved and duplicates are semantically meaningful: the same
/// product id appearing twice means two of the bundle's slots are filled with
/// that product. Entries are never deduplicated — validation checks each one
/// independently, in order.
///
/// Each product may additionally carry a requested per-line quantity; a
/// product with no explicit entry is requested once. Quantity zero is not
/// representable — it is rejected at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    items: Vec<ProductId>,
    #[serde(default)]
    quantities: HashMap<ProductId, u32>,
}

impl Selection {
    pub fn new(items: Vec<ProductId>) -> Self {
        Self {
            items,
            quantities: HashMap::new(),
        }
    }

    /// Attach an explicit requested quantity for one product.
    pub fn with_quantity(mut self, id: ProductId, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::ZeroQuantity { id: id.to_string() });
        }
        self.quantities.insert(id, quantity);
        Ok(self)
    }

    /// The ordered entries, duplicates included.
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The requested quantity for a product; defaults to 1 when no explicit
    /// quantity was attached.
    pub fn requested(&self, id: &ProductId) -> u32 {
        self.quantities.get(id).copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        let sel = Selection::new(vec![id("a"), id("a"), id("b")]);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.items(), &[id("a"), id("a"), id("b")]);
    }

    #[test]
    fn requested_defaults_to_one() {
        let sel = Selection::new(vec![id("a")]);
        assert_eq!(sel.requested(&id("a")), 1);
        assert_eq!(sel.requested(&id("never-mentioned")), 1);
    }

    #[test]
    fn explicit_quantity_is_returned() {
        let sel = Selection::new(vec![id("a")])
            .with_quantity(id("a"), 3)
            .unwrap();
        assert_eq!(sel.requested(&id("a")), 3);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let result = Selection::new(vec![id("a")]).with_quantity(id("a"), 0);
        assert!(matches!(result, Err(DomainError::ZeroQuantity { .. })));
    }

    #[test]
    fn empty_selection_is_representable() {
        let sel = Selection::default();
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }
}
