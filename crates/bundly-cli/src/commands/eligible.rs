//! Implementation of the `bundly eligible` command.

use bundly_core::domain::Product;
use serde::Serialize;

use crate::{
    cli::{EligibleArgs, ListFormat, global::GlobalArgs},
    commands::{parse_product_id, resolve_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Serialisable row for `--format json`.
#[derive(Debug, Serialize)]
struct ProductRow {
    id: String,
    name: String,
    category: String,
    price: String,
    stock: u32,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name().to_owned(),
            category: p.category().to_string(),
            price: p.price().to_string(),
            stock: p.stock(),
        }
    }
}

pub fn execute(
    args: EligibleArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let bundle_id = parse_product_id(&args.bundle)?;
    let service = resolve_service(args.catalog.as_ref(), &config)?;

    let products = service
        .eligible_products(&bundle_id)
        .map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Eligible products for '{}':", args.bundle))?;
            if products.is_empty() {
                output.info("No products currently qualify for this bundle")?;
            }
            for product in &products {
                output.print(&format!(
                    "  {:<24} {:<28} {:>8}  {:>3} left",
                    product.id().as_str(),
                    product.name(),
                    output.money(product.price()),
                    product.stock(),
                ))?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
            let json = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::List => {
            for product in &products {
                println!("{}", product.id());
            }
        }

        ListFormat::Csv => {
            println!("id,name,category,price,stock");
            for product in &products {
                println!(
                    "{},{},{},{},{}",
                    product.id(),
                    product.name(),
                    product.category(),
                    product.price(),
                    product.stock(),
                );
            }
        }
    }

    Ok(())
}
