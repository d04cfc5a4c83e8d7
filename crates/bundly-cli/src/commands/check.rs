//! Implementation of the `bundly check` command.
//!
//! Responsibility: translate CLI arguments into a `Selection`, call the core
//! bundle service, and display the report. No business logic lives here.

use tracing::{info, instrument};

use bundly_core::{
    application::BundleService,
    domain::{ProductId, Selection, ValidationReport},
};

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    commands::{parse_product_id, resolve_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `bundly check` command.
///
/// Dispatch sequence:
/// 1. Resolve the catalog and build the service
/// 2. Collect the picks (arguments, or interactive selection)
/// 3. Attach explicit `--qty` quantities
/// 4. Validate via `BundleService`
/// 5. Render the report; invalid selections exit non-zero unless `--no-fail`
#[instrument(skip_all, fields(bundle = %args.bundle))]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Catalog + service
    let bundle_id = parse_product_id(&args.bundle)?;
    let service = resolve_service(args.catalog.as_ref(), &config)?;

    // 2. Picks
    let picks = if args.products.is_empty() {
        interactive_picks(&service, &bundle_id, &global)?
    } else {
        args.products
            .iter()
            .map(|raw| parse_product_id(raw))
            .collect::<CliResult<Vec<_>>>()?
    };

    // 3. Quantities
    let mut selection = Selection::new(picks);
    for spec in &args.quantities {
        let (id, quantity) = parse_quantity_spec(spec)?;
        selection = selection
            .with_quantity(id, quantity)
            .map_err(|e| CliError::Core(e.into()))?;
    }

    // 4. Validate
    let report = service
        .validate_selection(&bundle_id, &selection)
        .map_err(CliError::Core)?;

    info!(
        valid = report.is_valid(),
        errors = report.errors().len(),
        warnings = report.warnings().len(),
        "Validation finished"
    );

    // 5. Render + exit policy
    if output.format() == OutputFormat::Json {
        print_json(&args.bundle, &report);
    } else {
        render_report(&report, &output)?;
    }

    if !report.is_valid() && !args.no_fail {
        return Err(CliError::SelectionRejected {
            problems: report.errors().len(),
        });
    }

    Ok(())
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_report(report: &ValidationReport, output: &OutputManager) -> CliResult<()> {
    for issue in report.errors() {
        output.error(&issue.to_string())?;
    }
    for warning in report.warnings() {
        output.warning(&warning.to_string())?;
    }

    if report.is_valid() {
        output.success("Selection is valid for this bundle")?;
    }

    Ok(())
}

/// Serialise the report as a JSON object to stdout (bypasses OutputManager
/// because JSON output must be parseable even in non-TTY pipes).
fn print_json(bundle: &str, report: &ValidationReport) {
    let doc = serde_json::json!({
        "bundle": bundle,
        "is_valid": report.is_valid(),
        "errors": report.errors().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "warnings": report.warnings().iter().map(ToString::to_string).collect::<Vec<_>>(),
    });
    println!("{doc}");
}

// ── Quantity parsing ──────────────────────────────────────────────────────────

/// Parse one `--qty ID=N` specification.
fn parse_quantity_spec(spec: &str) -> CliResult<(ProductId, u32)> {
    let (id_part, qty_part) = spec.split_once('=').ok_or_else(|| CliError::InvalidQuantity {
        spec: spec.into(),
        reason: "expected ID=N".into(),
    })?;

    let id = parse_product_id(id_part)?;
    let quantity: u32 = qty_part
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidQuantity {
            spec: spec.into(),
            reason: format!("'{qty_part}' is not a whole number"),
        })?;

    if quantity == 0 {
        return Err(CliError::InvalidQuantity {
            spec: spec.into(),
            reason: "quantity must be at least 1".into(),
        });
    }

    Ok((id, quantity))
}

// ── Interactive selection ─────────────────────────────────────────────────────

/// Let the user pick products from the eligible list when none were given.
#[cfg(feature = "interactive")]
fn interactive_picks(
    service: &BundleService,
    bundle_id: &ProductId,
    global: &GlobalArgs,
) -> CliResult<Vec<ProductId>> {
    use std::io::IsTerminal as _;

    if global.quiet || !std::io::stdin().is_terminal() {
        return Err(no_products_error());
    }

    let eligible = service
        .eligible_products(bundle_id)
        .map_err(CliError::Core)?;
    if eligible.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no eligible products to pick from".into(),
            source: None,
        });
    }

    let labels: Vec<String> = eligible
        .iter()
        .map(|p| format!("{} ({} left)", p.name(), p.stock()))
        .collect();

    let picked = dialoguer::MultiSelect::new()
        .with_prompt("Pick products for this bundle")
        .items(&labels)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("selection prompt failed: {e}"),
            source: Some(Box::new(e)),
        })?;

    if picked.is_empty() {
        return Err(CliError::Cancelled);
    }

    Ok(picked
        .into_iter()
        .map(|i| eligible[i].id().clone())
        .collect())
}

#[cfg(not(feature = "interactive"))]
fn interactive_picks(
    _service: &BundleService,
    _bundle_id: &ProductId,
    _global: &GlobalArgs,
) -> CliResult<Vec<ProductId>> {
    Err(no_products_error())
}

fn no_products_error() -> CliError {
    CliError::InvalidInput {
        message: "no products selected; pass product ids after the bundle id".into(),
        source: None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
