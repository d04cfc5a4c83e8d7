//! Built-in demo catalog.
//!
//! A small bath-and-body storefront that ships with Bundly so that the CLI
//! works out of the box — `bundly eligible lavender-gift-set` with no
//! `--catalog` flag runs against this data. Tests across the workspace use
//! the same seed, so treat it as append-only: renaming or repricing an entry
//! breaks assertions elsewhere.

use bundly_core::{
    domain::{BundleOffer, Category, Price, Product, ProductId},
    error::BundlyResult,
};

/// All seed products, in shelf order.
///
/// The seed deliberately covers every validation outcome: active and retired
/// products, a sold-out item, and stock levels inside and outside the
/// low-stock band.
pub fn products() -> BundlyResult<Vec<Product>> {
    let entries: &[(&str, &str, &str, i64, u32, bool)] = &[
        // Bundles are sellable products too; their listed price is the
        // bundle price.
        ("lavender-gift-set", "Lavender Gift Set", "bundles", 2499, 40, true),
        ("citrus-duo", "Citrus Duo", "bundles", 1599, 25, true),
        // Lavender shelf
        ("lavender-soap", "Lavender Soap Bar", "lavender", 899, 24, true),
        ("lavender-oil", "Lavender Essential Oil", "lavender", 1399, 4, true),
        ("lavender-mist", "Lavender Pillow Mist", "lavender", 1150, 12, true),
        ("lavender-bomb", "Lavender Bath Bomb", "lavender", 650, 0, true),
        ("lavender-sachet", "Lavender Drawer Sachet", "lavender", 450, 30, false),
        // Citrus shelf
        ("citrus-soap", "Citrus Soap Bar", "citrus", 899, 18, true),
        ("citrus-scrub", "Citrus Sugar Scrub", "citrus", 1250, 3, true),
    ];

    let mut products = Vec::with_capacity(entries.len());
    for (id, name, category, cents, stock, active) in entries {
        products.push(Product::new(
            ProductId::new(*id)?,
            *name,
            Category::new(*category)?,
            Price::from_minor_units(*cents),
            *stock,
            *active,
        )?);
    }
    Ok(products)
}

/// All seed bundle offers.
pub fn offers() -> BundlyResult<Vec<BundleOffer>> {
    Ok(vec![
        BundleOffer::new(
            ProductId::new("lavender-gift-set")?,
            Category::new("lavender")?,
            3,
        )?,
        BundleOffer::new(ProductId::new("citrus-duo")?, Category::new("citrus")?, 2)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_constructs_cleanly() {
        assert!(!products().unwrap().is_empty());
        assert_eq!(offers().unwrap().len(), 2);
    }

    #[test]
    fn every_offer_points_at_a_seed_product() {
        let products = products().unwrap();
        for offer in offers().unwrap() {
            assert!(
                products.iter().any(|p| p.id() == offer.bundle_product_id()),
                "offer {} has no backing product",
                offer.bundle_product_id()
            );
        }
    }

    #[test]
    fn seed_covers_the_interesting_stock_states() {
        let products = products().unwrap();
        assert!(products.iter().any(|p| p.stock() == 0));
        assert!(products.iter().any(|p| !p.is_active()));
        assert!(products.iter().any(|p| p.stock() > 0 && p.stock() <= 5));
    }
}
