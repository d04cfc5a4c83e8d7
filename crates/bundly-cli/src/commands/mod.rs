//! Command implementations.
//!
//! Each command translates CLI arguments into core calls and renders the
//! result through [`OutputManager`](crate::output::OutputManager). Shared
//! wiring (catalog resolution, id parsing) lives here so the commands stay
//! thin.

use std::path::PathBuf;

use bundly_core::{application::BundleService, domain::ProductId};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod check;
pub mod completions;
pub mod config;
pub mod eligible;
pub mod price;

/// Build a [`BundleService`] over the catalog the user asked for.
///
/// Resolution order: `--catalog` flag, then `catalog.path` from config,
/// then the built-in demo catalog.
pub(crate) fn resolve_service(
    catalog_flag: Option<&PathBuf>,
    config: &AppConfig,
) -> CliResult<BundleService> {
    let catalog: Box<dyn bundly_core::application::Catalog> =
        match catalog_flag.or(config.catalog.path.as_ref()) {
            Some(path) => {
                Box::new(bundly_adapters::load_catalog(path).map_err(CliError::Core)?)
            }
            None => Box::new(
                bundly_adapters::InMemoryCatalog::with_seed().map_err(CliError::Core)?,
            ),
        };
    Ok(BundleService::new(catalog))
}

/// Parse a user-supplied product id, surfacing domain validation as a CLI
/// error.
pub(crate) fn parse_product_id(raw: &str) -> CliResult<ProductId> {
    ProductId::new(raw).map_err(|e| CliError::Core(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_product_id_is_rejected() {
        assert!(parse_product_id("  ").is_err());
        assert!(parse_product_id("lavender-soap").is_ok());
    }

    #[test]
    fn default_service_uses_seed_catalog() {
        let service = resolve_service(None, &AppConfig::default()).unwrap();
        let eligible = service
            .eligible_products(&ProductId::new("lavender-gift-set").unwrap())
            .unwrap();
        assert!(!eligible.is_empty());
    }
}
