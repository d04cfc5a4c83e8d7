//! Implementation of the `bundly price` command.

use tracing::instrument;

use bundly_core::domain::Selection;

use crate::{
    cli::{OutputFormat, PriceArgs, global::GlobalArgs},
    commands::{parse_product_id, resolve_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `bundly price` command.
///
/// Duplicated product ids are priced once per occurrence; requested
/// quantities play no part in pricing.
#[instrument(skip_all, fields(bundle = %args.bundle, picks = args.products.len()))]
pub fn execute(
    args: PriceArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let bundle_id = parse_product_id(&args.bundle)?;
    let service = resolve_service(args.catalog.as_ref(), &config)?;

    let picks = args
        .products
        .iter()
        .map(|raw| parse_product_id(raw))
        .collect::<CliResult<Vec<_>>>()?;
    let selection = Selection::new(picks);

    let quote = service
        .price_selection(&bundle_id, &selection)
        .map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        let doc = serde_json::json!({
            "bundle": args.bundle,
            "bundle_price": quote.bundle_price.to_string(),
            "individual_total": quote.individual_total.to_string(),
            "savings": quote.savings.to_string(),
        });
        println!("{doc}");
        return Ok(());
    }

    output.header(&format!("Pricing '{}':", args.bundle))?;
    output.print(&format!(
        "  Bundle price:     {}",
        output.money(quote.bundle_price)
    ))?;
    output.print(&format!(
        "  Individual total: {}",
        output.money(quote.individual_total)
    ))?;
    output.print(&format!("  Savings:          {}", output.money(quote.savings)))?;

    if quote.savings.is_negative() {
        output.warning("This bundle costs more than buying the selection individually")?;
    }

    Ok(())
}
