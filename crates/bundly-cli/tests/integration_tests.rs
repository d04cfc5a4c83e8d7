//! Integration tests for bundly-cli, driven against the built-in demo
//! catalog (and a temporary catalog file where noted).

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn bundly() -> Command {
    Command::cargo_bin("bundly").unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_prints_usage() {
    bundly()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundly"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("eligible"));
}

#[test]
fn version_flag_prints_cargo_version() {
    bundly()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    bundly().assert().failure();
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn valid_selection_passes() {
    bundly()
        .args([
            "check",
            "lavender-gift-set",
            "lavender-soap",
            "lavender-soap",
            "lavender-mist",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection is valid"));
}

#[test]
fn wrong_category_is_rejected_with_exit_2() {
    bundly()
        .args([
            "check",
            "lavender-gift-set",
            "lavender-soap",
            "lavender-soap",
            "citrus-soap",
        ])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains(
            "is not eligible for this bundle (wrong category)",
        ))
        .stderr(predicate::str::contains("Selection rejected"));
}

#[test]
fn unknown_bundle_reports_invalid_configuration() {
    bundly()
        .args(["check", "ghost-bundle", "lavender-soap"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Invalid bundle configuration"));
}

#[test]
fn count_mismatch_names_both_numbers() {
    bundly()
        .args(["check", "lavender-gift-set", "lavender-soap"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "requires exactly 3 products, but 1 were selected",
        ));
}

#[test]
fn no_fail_downgrades_invalid_to_exit_0() {
    bundly()
        .args(["check", "lavender-gift-set", "lavender-soap", "--no-fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("requires exactly 3 products"));
}

#[test]
fn low_stock_selection_warns_but_passes() {
    // lavender-oil has 4 left in the seed catalog.
    bundly()
        .args([
            "check",
            "lavender-gift-set",
            "lavender-oil",
            "lavender-soap",
            "lavender-soap",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Low stock"))
        .stdout(predicate::str::contains("Selection is valid"));
}

#[test]
fn insufficient_quantity_is_rejected() {
    bundly()
        .args([
            "check",
            "lavender-gift-set",
            "lavender-oil",
            "lavender-soap",
            "lavender-soap",
            "--qty",
            "lavender-oil=9",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Insufficient stock"))
        .stdout(predicate::str::contains("9 requested, 4 available"));
}

#[test]
fn malformed_qty_spec_is_a_user_error() {
    bundly()
        .args([
            "check",
            "lavender-gift-set",
            "lavender-soap",
            "--qty",
            "lavender-soap=zero",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid quantity"));
}

#[test]
fn json_output_is_machine_readable() {
    bundly()
        .args([
            "--output-format",
            "json",
            "check",
            "lavender-gift-set",
            "lavender-soap",
            "lavender-soap",
            "lavender-mist",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_valid\":true"));
}

#[test]
fn quiet_valid_check_prints_nothing() {
    bundly()
        .args([
            "-q",
            "check",
            "lavender-gift-set",
            "lavender-soap",
            "lavender-soap",
            "lavender-mist",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── eligible ──────────────────────────────────────────────────────────────────

#[test]
fn eligible_lists_active_in_stock_products_only() {
    bundly()
        .args(["eligible", "lavender-gift-set"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lavender Soap Bar"))
        .stdout(predicate::str::contains("Lavender Essential Oil"))
        .stdout(predicate::str::contains("Lavender Drawer Sachet").not()) // inactive
        .stdout(predicate::str::contains("Lavender Bath Bomb").not()) // sold out
        .stdout(predicate::str::contains("Citrus").not()); // wrong category
}

#[test]
fn eligible_list_format_prints_bare_ids() {
    bundly()
        .args(["eligible", "lavender-gift-set", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lavender-soap"))
        .stdout(predicate::str::contains("Lavender Soap Bar").not());
}

#[test]
fn eligible_csv_format_has_header() {
    bundly()
        .args(["eligible", "citrus-duo", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,name,category,price,stock"));
}

#[test]
fn eligible_for_unknown_bundle_exits_3() {
    bundly()
        .args(["eligible", "ghost-bundle"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No bundle offer"));
}

// ── price ─────────────────────────────────────────────────────────────────────

#[test]
fn price_reports_bundle_individual_and_savings() {
    bundly()
        .args([
            "price",
            "lavender-gift-set",
            "lavender-soap",
            "lavender-oil",
            "lavender-mist",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle price"))
        .stdout(predicate::str::contains("Individual total"))
        .stdout(predicate::str::contains("Savings"));
}

#[test]
fn negative_savings_are_reported_not_hidden() {
    // Two soaps (17.98) against a 24.99 bundle price.
    bundly()
        .args(["price", "lavender-gift-set", "lavender-soap", "lavender-soap"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "costs more than buying the selection individually",
        ));
}

#[test]
fn price_for_unknown_bundle_exits_3() {
    bundly()
        .args(["price", "ghost-bundle", "lavender-soap"])
        .assert()
        .failure()
        .code(3);
}

// ── catalog files ─────────────────────────────────────────────────────────────

const TINY_CATALOG: &str = r#"{
    "products": [
        {"id": "tea-sampler", "name": "Tea Sampler", "category": "bundles",
         "price": "12.00", "stock": 5, "active": true},
        {"id": "green-tea", "name": "Green Tea Tin", "category": "tea",
         "price": "7.50", "stock": 9, "active": true},
        {"id": "mint-tea", "name": "Mint Tea Tin", "category": "tea",
         "price": "6.00", "stock": 2, "active": true}
    ],
    "bundles": [
        {"bundle_product_id": "tea-sampler", "allowed_category": "tea",
         "required_quantity": 2}
    ]
}"#;

#[test]
fn catalog_flag_swaps_the_data_source() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TINY_CATALOG.as_bytes()).unwrap();

    bundly()
        .args(["eligible", "tea-sampler", "--catalog"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Green Tea Tin"))
        .stdout(predicate::str::contains("Lavender").not());
}

#[test]
fn check_against_catalog_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TINY_CATALOG.as_bytes()).unwrap();

    bundly()
        .args(["check", "tea-sampler", "green-tea", "mint-tea", "--catalog"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Low stock")) // mint-tea has 2 left
        .stdout(predicate::str::contains("Selection is valid"));
}

#[test]
fn missing_catalog_file_is_a_configuration_error() {
    bundly()
        .args([
            "eligible",
            "tea-sampler",
            "--catalog",
            "/absolutely/does/not/exist.json",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn shell_completions_generate() {
    bundly()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundly"));
}
