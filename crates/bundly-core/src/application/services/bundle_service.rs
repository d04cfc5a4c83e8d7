//! Bundle Service - main application orchestrator.
//!
//! This service answers the three questions a storefront asks about bundles:
//! 1. May this selection be purchased as this bundle? (validate)
//! 2. Which products qualify for this bundle? (eligible)
//! 3. What does the bundle cost versus buying the parts? (price)
//!
//! It implements the driving port (incoming) and uses the driven `Catalog`
//! port (outgoing). The catalog is injected at construction — no service
//! locator, no global state — so tests substitute a fake by passing one in.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Catalog, ProductFilter},
    },
    domain::{
        BundleOffer, Price, Product, ProductId, Selection, SelectionRules, ValidationIssue,
        ValidationReport,
    },
    error::{BundlyError, BundlyResult},
};

/// A bundle's price against buying the same selection individually.
///
/// `savings` is simply `individual_total - bundle_price` and may be negative
/// when the bundle costs more than the parts; it is reported as-is, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub bundle_price: Price,
    pub individual_total: Price,
    pub savings: Price,
}

/// Main bundle service.
///
/// Stateless and request-scoped: construct, call, discard. Every operation
/// is a pure read — the catalog is never mutated.
pub struct BundleService {
    catalog: Box<dyn Catalog>,
}

impl BundleService {
    /// Create a new bundle service with the given catalog adapter.
    pub fn new(catalog: Box<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Validate a proposed selection against a bundle offer.
    ///
    /// Business outcomes (missing products, wrong category, stock problems,
    /// wrong pick count) land in the returned [`ValidationReport`]; the
    /// `Result` only fails on infrastructure faults. Checks accumulate —
    /// nothing short-circuits except a missing offer, which yields the
    /// `Invalid bundle configuration` report without attempting per-entry
    /// checks.
    ///
    /// Entries are checked independently, in order; a duplicated id is
    /// re-checked on every occurrence, so selecting the same ineligible
    /// product twice reports the problem twice.
    #[instrument(skip_all, fields(bundle = %bundle_id, picks = selection.len()))]
    pub fn validate_selection(
        &self,
        bundle_id: &ProductId,
        selection: &Selection,
    ) -> BundlyResult<ValidationReport> {
        let Some(offer) = self.lookup_offer(bundle_id)? else {
            debug!("no bundle offer resolved; selection rejected without item checks");
            return Ok(ValidationReport::invalid_configuration());
        };

        let mut report = ValidationReport::default();

        if let Some(issue) = SelectionRules::check_count(&offer, selection) {
            report.push_error(issue);
        }

        for product_id in selection.items() {
            match self.lookup_product(product_id)? {
                None => report.push_error(ValidationIssue::ProductNotFound {
                    id: product_id.clone(),
                }),
                Some(product) => {
                    let outcome =
                        SelectionRules::check_line(&offer, &product, selection.requested(product_id));
                    for issue in outcome.errors {
                        report.push_error(issue);
                    }
                    if let Some(warning) = outcome.warning {
                        report.push_warning(warning);
                    }
                }
            }
        }

        debug!(
            valid = report.is_valid(),
            errors = report.errors().len(),
            warnings = report.warnings().len(),
            "Selection validated"
        );
        Ok(report)
    }

    /// Every product that qualifies for the bundle: correct category, active,
    /// and in stock. Catalog order; no pagination or ranking.
    #[instrument(skip_all, fields(bundle = %bundle_id))]
    pub fn eligible_products(&self, bundle_id: &ProductId) -> BundlyResult<Vec<Product>> {
        let offer = self
            .lookup_offer(bundle_id)?
            .ok_or_else(|| ApplicationError::UnknownBundle {
                id: bundle_id.to_string(),
            })?;

        let filter = ProductFilter {
            category: offer.allowed_category().clone(),
            in_stock: true,
        };
        let products = self
            .catalog
            .products(&filter)
            .map_err(|e| self.lookup_failed("product listing", bundle_id, e))?;

        Ok(products.into_iter().filter(Product::is_active).collect())
    }

    /// Price the bundle against buying the selection individually.
    ///
    /// The bundle price is the bundle product's own listed price — it is not
    /// a function of the selection. The individual total sums each entry's
    /// listed price per occurrence, so duplicates count once per pick.
    ///
    /// An entry that fails to resolve contributes zero to the individual
    /// total without failing the operation. Upstream has always behaved this
    /// way; confirm with merchandising before tightening it.
    #[instrument(skip_all, fields(bundle = %bundle_id, picks = selection.len()))]
    pub fn price_selection(
        &self,
        bundle_id: &ProductId,
        selection: &Selection,
    ) -> BundlyResult<PriceQuote> {
        let bundle_product =
            self.lookup_product(bundle_id)?
                .ok_or_else(|| ApplicationError::UnknownBundle {
                    id: bundle_id.to_string(),
                })?;
        let bundle_price = bundle_product.price();

        let mut individual_total = Price::ZERO;
        for product_id in selection.items() {
            match self.lookup_product(product_id)? {
                Some(product) => individual_total += product.price(),
                None => {
                    warn!(product = %product_id, "selected product missing from catalog; priced as zero");
                }
            }
        }

        Ok(PriceQuote {
            bundle_price,
            individual_total,
            savings: individual_total - bundle_price,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn lookup_offer(&self, bundle_id: &ProductId) -> BundlyResult<Option<BundleOffer>> {
        self.catalog
            .bundle_offer(bundle_id)
            .map_err(|e| self.lookup_failed("bundle offer", bundle_id, e))
    }

    fn lookup_product(&self, product_id: &ProductId) -> BundlyResult<Option<Product>> {
        self.catalog
            .product(product_id)
            .map_err(|e| self.lookup_failed("product", product_id, e))
    }

    /// Wrap a port fault in a structured lookup error carrying the cause.
    fn lookup_failed(
        &self,
        entity: &'static str,
        id: &ProductId,
        cause: BundlyError,
    ) -> BundlyError {
        ApplicationError::LookupFailed {
            entity,
            id: id.to_string(),
            source: Arc::new(cause),
        }
        .into()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        application::ports::MockCatalog,
        domain::{BundleOffer, Category, StockWarning},
        error::BundlyError,
    };

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn cat(s: &str) -> Category {
        Category::new(s).unwrap()
    }

    fn product(pid: &str, name: &str, category: &str, cents: i64, stock: u32, active: bool) -> Product {
        Product::new(
            id(pid),
            name,
            cat(category),
            Price::from_minor_units(cents),
            stock,
            active,
        )
        .unwrap()
    }

    /// Map-backed catalog; enough for every non-fault test.
    #[derive(Default)]
    struct FakeCatalog {
        products: HashMap<ProductId, Product>,
        offers: HashMap<ProductId, BundleOffer>,
    }

    impl FakeCatalog {
        fn with_product(mut self, p: Product) -> Self {
            self.products.insert(p.id().clone(), p);
            self
        }

        fn with_offer(mut self, o: BundleOffer) -> Self {
            self.offers.insert(o.bundle_product_id().clone(), o);
            self
        }

        fn into_service(self) -> BundleService {
            BundleService::new(Box::new(self))
        }
    }

    impl Catalog for FakeCatalog {
        fn bundle_offer(&self, bundle_product_id: &ProductId) -> BundlyResult<Option<BundleOffer>> {
            Ok(self.offers.get(bundle_product_id).cloned())
        }

        fn product(&self, product_id: &ProductId) -> BundlyResult<Option<Product>> {
            Ok(self.products.get(product_id).cloned())
        }

        fn products(&self, filter: &ProductFilter) -> BundlyResult<Vec<Product>> {
            Ok(self
                .products
                .values()
                .filter(|p| p.category() == &filter.category)
                .filter(|p| !filter.in_stock || p.in_stock())
                .cloned()
                .collect())
        }
    }

    /// Seed: a three-pick lavender bundle plus a mixed shelf of products.
    fn lavender_shop() -> FakeCatalog {
        FakeCatalog::default()
            .with_offer(BundleOffer::new(id("gift-set"), cat("lavender"), 3).unwrap())
            .with_product(product("gift-set", "Lavender Gift Set", "bundles", 2200, 50, true))
            .with_product(product("soap", "Lavender Soap", "lavender", 899, 10, true))
            .with_product(product("oil", "Lavender Oil", "lavender", 1250, 3, true))
            .with_product(product("citrus-soap", "Citrus Soap", "citrus", 899, 10, true))
            .with_product(product("retired", "Lavender Sachet", "lavender", 450, 8, false))
            .with_product(product("sold-out", "Lavender Bath Bomb", "lavender", 650, 0, true))
    }

    // ── validate_selection ────────────────────────────────────────────────

    #[test]
    fn clean_selection_is_valid() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap"), id("soap"), id("soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn missing_offer_short_circuits() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap")]);

        let report = service.validate_selection(&id("ghost"), &selection).unwrap();

        assert!(!report.is_valid());
        assert_eq!(
            report.errors(),
            &[ValidationIssue::InvalidBundleConfiguration]
        );
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn missing_offer_never_touches_products() {
        // The short-circuit must not attempt per-entry lookups.
        let mut catalog = MockCatalog::new();
        catalog.expect_bundle_offer().returning(|_| Ok(None));
        catalog.expect_product().times(0);

        let service = BundleService::new(Box::new(catalog));
        let selection = Selection::new(vec![id("soap"), id("oil")]);

        let report = service.validate_selection(&id("ghost"), &selection).unwrap();
        assert!(!report.is_valid());
    }

    #[test]
    fn wrong_category_entry_reports_by_display_name() {
        // Count passes (3 == 3); only the citrus entry is rejected.
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap"), id("soap"), id("citrus-soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.errors()[0].to_string(),
            "Product \"Citrus Soap\" is not eligible for this bundle (wrong category)"
        );
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn duplicate_ineligible_entries_are_each_reported() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("citrus-soap"), id("citrus-soap"), id("soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        let category_errors = report
            .errors()
            .iter()
            .filter(|e| matches!(e, ValidationIssue::WrongCategory { .. }))
            .count();
        assert_eq!(category_errors, 2);
    }

    #[test]
    fn count_mismatch_does_not_suppress_item_checks() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("citrus-soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert!(matches!(
            report.errors()[0],
            ValidationIssue::CountMismatch {
                required: 3,
                selected: 1
            }
        ));
        assert!(matches!(
            report.errors()[1],
            ValidationIssue::WrongCategory { .. }
        ));
    }

    #[test]
    fn short_valid_selection_fails_only_the_count_check() {
        let offer = BundleOffer::new(id("duo"), cat("lavender"), 2).unwrap();
        let service = FakeCatalog::default()
            .with_offer(offer)
            .with_product(product("soap", "Lavender Soap", "lavender", 899, 10, true))
            .into_service();
        let selection = Selection::new(vec![id("soap")]);

        let report = service.validate_selection(&id("duo"), &selection).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.errors()[0].to_string(),
            "Bundle requires exactly 2 products, but 1 were selected"
        );
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn unknown_product_skips_remaining_line_checks() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("nope"), id("soap"), id("soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].to_string(), "Product nope not found");
    }

    #[test]
    fn inactive_product_is_rejected() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("retired"), id("soap"), id("soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(
            report.errors(),
            &[ValidationIssue::Inactive {
                name: "Lavender Sachet".into()
            }]
        );
    }

    #[test]
    fn stock_exactly_matching_request_still_warns() {
        // Oil has stock 3: requesting all 3 is sufficient but inside the
        // low-stock band, so the line warns without erroring.
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("oil"), id("soap"), id("soap")])
            .with_quantity(id("oil"), 3)
            .unwrap();

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert!(report.is_valid());
        assert_eq!(
            report.warnings(),
            &[StockWarning::LowStock {
                name: "Lavender Oil".into(),
                remaining: 3
            }]
        );
    }

    #[test]
    fn over_requesting_errors_without_warning() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("oil"), id("soap"), id("soap")])
            .with_quantity(id("oil"), 4)
            .unwrap();

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(
            report.errors(),
            &[ValidationIssue::InsufficientStock {
                name: "Lavender Oil".into(),
                requested: 4,
                available: 3
            }]
        );
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn sold_out_product_errors_rather_than_warns() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("sold-out"), id("soap"), id("soap")]);

        let report = service.validate_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(report.errors().len(), 1);
        assert!(matches!(
            report.errors()[0],
            ValidationIssue::InsufficientStock { available: 0, .. }
        ));
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn validity_tracks_errors_exactly() {
        let service = lavender_shop().into_service();
        for selection in [
            Selection::new(vec![id("soap"), id("soap"), id("soap")]),
            Selection::new(vec![id("soap")]),
            Selection::new(vec![id("oil"), id("oil"), id("oil")]),
        ] {
            let report = service.validate_selection(&id("gift-set"), &selection).unwrap();
            assert_eq!(report.is_valid(), report.errors().is_empty());
        }
    }

    #[test]
    fn catalog_fault_surfaces_as_structured_lookup_error() {
        let mut catalog = MockCatalog::new();
        catalog.expect_bundle_offer().returning(|_| {
            Ok(Some(
                BundleOffer::new(
                    ProductId::new("gift-set").unwrap(),
                    Category::new("lavender").unwrap(),
                    1,
                )
                .unwrap(),
            ))
        });
        catalog
            .expect_product()
            .returning(|_| Err(ApplicationError::CatalogLockError.into()));

        let service = BundleService::new(Box::new(catalog));
        let selection = Selection::new(vec![id("soap")]);

        let err = service
            .validate_selection(&id("gift-set"), &selection)
            .unwrap_err();

        match err {
            BundlyError::Application(ApplicationError::LookupFailed { entity, id, source }) => {
                assert_eq!(entity, "product");
                assert_eq!(id, "soap");
                assert!(source.to_string().contains("Catalog store error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ── eligible_products ─────────────────────────────────────────────────

    #[test]
    fn eligible_excludes_inactive_and_sold_out() {
        let service = lavender_shop().into_service();

        let products = service.eligible_products(&id("gift-set")).unwrap();

        let names: Vec<&str> = products.iter().map(Product::name).collect();
        assert!(names.contains(&"Lavender Soap"));
        assert!(names.contains(&"Lavender Oil"));
        assert!(!names.contains(&"Lavender Sachet")); // inactive
        assert!(!names.contains(&"Lavender Bath Bomb")); // sold out
        assert!(!names.contains(&"Citrus Soap")); // wrong category
    }

    #[test]
    fn eligible_for_unknown_bundle_is_not_found() {
        let service = lavender_shop().into_service();
        let err = service.eligible_products(&id("ghost")).unwrap_err();
        assert!(matches!(
            err,
            BundlyError::Application(ApplicationError::UnknownBundle { .. })
        ));
    }

    // ── price_selection ───────────────────────────────────────────────────

    #[test]
    fn price_counts_duplicates_per_occurrence() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap"), id("soap"), id("oil")]);

        let quote = service.price_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(quote.bundle_price, Price::from_minor_units(2200));
        assert_eq!(quote.individual_total, Price::from_minor_units(899 + 899 + 1250));
        assert_eq!(quote.savings, Price::from_minor_units(848));
    }

    #[test]
    fn price_savings_may_be_negative() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap"), id("soap")]);

        let quote = service.price_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(quote.individual_total, Price::from_minor_units(1798));
        assert!(quote.savings.is_negative());
        assert_eq!(quote.savings, Price::from_minor_units(1798 - 2200));
    }

    #[test]
    fn unresolvable_entry_prices_as_zero() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap"), id("nope")]);

        let quote = service.price_selection(&id("gift-set"), &selection).unwrap();

        assert_eq!(quote.individual_total, Price::from_minor_units(899));
    }

    #[test]
    fn pricing_unknown_bundle_is_not_found() {
        let service = lavender_shop().into_service();
        let selection = Selection::new(vec![id("soap")]);
        let err = service.price_selection(&id("ghost"), &selection).unwrap_err();
        assert!(matches!(
            err,
            BundlyError::Application(ApplicationError::UnknownBundle { .. })
        ));
    }
}
