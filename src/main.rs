//! sheet-quote - CLI tool to price full and cut-to-size plastic sheets.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sheet_quote_rs::generator::format_money;
use sheet_quote_rs::{
    parse_price_file, render_summary, BackendConfig, CutSpec, HttpBackend, QuoteMode, QuoteSession,
    Selection,
};

/// Price full sheets or cut-to-size pieces against a grade's price table.
#[derive(Parser, Debug)]
#[command(name = "sheet-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Price table JSON file (productDetails + prices)
    #[arg(short, long)]
    prices: PathBuf,

    /// Series name
    #[arg(long)]
    series: String,

    /// Thickness label, e.g. 3mm
    #[arg(long)]
    thickness: String,

    /// Full sheet size label, e.g. 1220x2420
    #[arg(long)]
    size: String,

    /// Number of sheets, or of cut pieces in cut-to-size mode
    #[arg(short, long, allow_negative_numbers = true)]
    quantity: i64,

    /// Discount percentage (full sheets only)
    #[arg(short, long)]
    discount: Option<f64>,

    /// Cut piece length; enables cut-to-size pricing
    #[arg(long, requires = "cut_width")]
    cut_length: Option<f64>,

    /// Cut piece width
    #[arg(long, requires = "cut_length")]
    cut_width: Option<f64>,

    /// Flat machining cost for the run
    #[arg(long, requires = "cut_length", allow_negative_numbers = true)]
    machining_cost: Option<f64>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    /// Save the quotation to the backend
    #[arg(long)]
    submit: bool,

    /// Add the full-sheet selection to the cart
    #[arg(long, conflicts_with = "cut_length")]
    cart: bool,

    /// Backend base URL (defaults to $API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Loading prices: {}", args.prices.display());

    let table = parse_price_file(&args.prices)
        .with_context(|| format!("Failed to load {}", args.prices.display()))?;

    info!(
        "Loaded {} price(s) for {} series",
        table.len(),
        table.unique_series().len()
    );

    let mode = match (args.cut_length, args.cut_width) {
        (Some(_), Some(_)) => QuoteMode::CutToSize,
        _ => QuoteMode::FullSheets,
    };

    let mut session = QuoteSession::new(mode);
    session.set_selection(
        Selection::new(args.series, args.thickness, args.size, args.quantity)
            .with_discount(args.discount),
    );
    if let (Some(length), Some(width)) = (args.cut_length, args.cut_width) {
        session.set_cut(CutSpec::new(length, width).with_machining_cost(args.machining_cost));
    }

    // Validate
    let validation = session.validate();

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for issue in &validation.errors {
        error!("{}", issue);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    if mode == QuoteMode::CutToSize {
        if args.discount.is_some() {
            warn!("Discount is ignored for cut-to-size quotes");
        }
        if let Some(price) = session.full_sheet_price(&table) {
            info!("Full sheet price: {}", format_money(price));
        }
    }

    let Some(quote) = session.derive(&table) else {
        anyhow::bail!("No price available for this selection");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        let cut = (mode == QuoteMode::CutToSize).then(|| session.cut());
        print!("{}", render_summary(session.selection(), cut, &quote));
    }

    if !args.submit && !args.cart {
        return Ok(());
    }

    let config = match args.api_url {
        Some(url) => BackendConfig {
            base_url: url,
            ..BackendConfig::from_env()
        },
        None => BackendConfig::from_env(),
    };
    let backend = HttpBackend::new(config)?;

    if args.cart {
        session
            .add_to_cart(&table, &backend)
            .context("Failed to add item to cart")?;
        info!("Item added to cart");
    }

    if args.submit {
        let label = match mode {
            QuoteMode::FullSheets => "Full sheets quotation",
            QuoteMode::CutToSize => "Cut-to-size quotation",
        };
        let outcome = session
            .submit(&table, &backend)
            .context("Failed to save quotation")?;
        info!("{}", outcome.message(label));
    }

    Ok(())
}
