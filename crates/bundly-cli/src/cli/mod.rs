//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bundly",
    bin_name = "bundly",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9fa} Storefront bundle validation and pricing",
    long_about = "Bundly validates customer bundle selections against a product \
                  catalog, lists eligible products, and prices bundles against \
                  buying the items individually.",
    after_help = "EXAMPLES:\n\
        \x20 bundly check lavender-gift-set lavender-soap lavender-soap lavender-mist\n\
        \x20 bundly check lavender-gift-set lavender-oil --qty lavender-oil=3\n\
        \x20 bundly eligible lavender-gift-set --format table\n\
        \x20 bundly price lavender-gift-set lavender-soap lavender-oil lavender-mist\n\
        \x20 bundly completions bash > /usr/share/bash-completion/completions/bundly",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a bundle selection.
    #[command(
        visible_alias = "c",
        about = "Validate a selection against a bundle",
        after_help = "EXAMPLES:\n\
            \x20 bundly check lavender-gift-set lavender-soap lavender-soap lavender-mist\n\
            \x20 bundly check lavender-gift-set lavender-oil --qty lavender-oil=2\n\
            \x20 bundly check citrus-duo --catalog ./catalog.json citrus-soap citrus-scrub"
    )]
    Check(CheckArgs),

    /// List products eligible for a bundle.
    #[command(
        visible_alias = "ls",
        about = "List eligible products for a bundle",
        after_help = "EXAMPLES:\n\
            \x20 bundly eligible lavender-gift-set\n\
            \x20 bundly eligible citrus-duo --format json\n\
            \x20 bundly eligible citrus-duo --catalog ./catalog.json"
    )]
    Eligible(EligibleArgs),

    /// Price a bundle against buying the selection individually.
    #[command(
        about = "Price a bundle versus individual purchase",
        after_help = "EXAMPLES:\n\
            \x20 bundly price lavender-gift-set lavender-soap lavender-oil lavender-mist\n\
            \x20 bundly price citrus-duo citrus-soap citrus-soap"
    )]
    Price(PriceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bundly completions bash > ~/.local/share/bash-completion/completions/bundly\n\
            \x20 bundly completions zsh  > ~/.zfunc/_bundly\n\
            \x20 bundly completions fish > ~/.config/fish/completions/bundly.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Bundly configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bundly config get catalog.path\n\
            \x20 bundly config set catalog.path ./catalog.json\n\
            \x20 bundly config list"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `bundly check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Bundle product id whose offer the selection fills.
    #[arg(value_name = "BUNDLE", help = "Bundle product id")]
    pub bundle: String,

    /// Selected product ids, one per bundle slot.  Repeat an id to fill
    /// several slots with the same product.
    #[arg(value_name = "PRODUCT", help = "Selected product ids (repeatable)")]
    pub products: Vec<String>,

    /// Per-product requested quantity, `ID=N`.  Products without an entry
    /// are requested once.
    #[arg(
        long = "qty",
        value_name = "ID=N",
        help = "Requested quantity for a product (repeatable)"
    )]
    pub quantities: Vec<String>,

    /// Catalog file to validate against (defaults to the built-in demo
    /// catalog, or `catalog.path` from configuration).
    #[arg(long = "catalog", value_name = "FILE", help = "Catalog JSON file")]
    pub catalog: Option<PathBuf>,

    /// Exit successfully even when the selection is invalid.
    #[arg(long = "no-fail", help = "Always exit 0; report problems only")]
    pub no_fail: bool,
}

// ── eligible ──────────────────────────────────────────────────────────────────

/// Arguments for `bundly eligible`.
#[derive(Debug, Args)]
pub struct EligibleArgs {
    /// Bundle product id to list eligible products for.
    #[arg(value_name = "BUNDLE", help = "Bundle product id")]
    pub bundle: String,

    /// Catalog file (defaults to the built-in demo catalog).
    #[arg(long = "catalog", value_name = "FILE", help = "Catalog JSON file")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `eligible` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── price ─────────────────────────────────────────────────────────────────────

/// Arguments for `bundly price`.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Bundle product id to price.
    #[arg(value_name = "BUNDLE", help = "Bundle product id")]
    pub bundle: String,

    /// Selected product ids; duplicates are priced once per occurrence.
    #[arg(value_name = "PRODUCT", help = "Selected product ids (repeatable)")]
    pub products: Vec<String>,

    /// Catalog file (defaults to the built-in demo catalog).
    #[arg(long = "catalog", value_name = "FILE", help = "Catalog JSON file")]
    pub catalog: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bundly completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bundly config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `catalog.path`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
