use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::debug;

use tally::{load_json, reconcile, PriceIndex, Report, RESULTS_FILE};

#[derive(Parser)]
#[command(version, about = "Totals sales records against a product price catalogue")]
struct Cli {
    /// Product catalogue: a JSON array of {"title", "price"} entries
    catalogue: PathBuf,

    /// Sales records: a JSON array of {"Product", "Quantity"} entries
    sales: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let start = Instant::now();
    let cli = Cli::parse();

    let catalogue = load_json(&cli.catalogue)
        .with_context(|| format!("reading catalogue {:?}", cli.catalogue))?;
    let sales = load_json(&cli.sales)
        .with_context(|| format!("reading sales records {:?}", cli.sales))?;

    let index = PriceIndex::index(&catalogue);
    debug!(
        "indexed {} products from {} catalogue entries",
        index.len(),
        catalogue.len()
    );

    let result = reconcile(&index, &sales);
    for rejection in &result.rejected {
        eprintln!("error: {rejection}");
    }
    debug!(
        "reconciled {} sale records, {} rejected",
        sales.len(),
        result.rejected.len()
    );

    let report = Report {
        total: result.total,
        catalogue_file: cli.catalogue.display().to_string(),
        sales_file: cli.sales.display().to_string(),
        elapsed: start.elapsed(),
        timestamp: Local::now(),
    };
    println!("{report}");

    match report.save() {
        Ok(()) => println!("results saved to {RESULTS_FILE}"),
        Err(err) => eprintln!("error: {err:#}"),
    }
    Ok(())
}
