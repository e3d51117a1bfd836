use anyhow::{Context, Result};
use clap::Parser;
use pricegraph::prompt::Console;
use pricegraph::{aggregate, cell, chart, csv_reader, domain, render, reshape, RenderOptions};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricegraph")]
#[command(about = "Compare average commodity prices across locations", long_about = None)]
struct Args {
    /// CSV file with commodity rows and one price column per location
    csv: PathBuf,

    /// Where to write the chart
    #[arg(short, long, default_value = "prices.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load and reshape the wide table
    let raw_rows = csv_reader::read_table(&args.csv)?;
    let table = cell::normalize_rows(&raw_rows)
        .with_context(|| format!("Failed to normalize '{}'", args.csv.display()))?;
    let records = reshape::reshape(&table)
        .with_context(|| format!("Failed to reshape '{}'", args.csv.display()))?;
    let domains = domain::extract_domains(&records);

    // Interactive selection
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let selection = console.run_selection(&domains)?;

    // Filter, report, average
    let filtered = aggregate::filter_records(&records, &selection);
    console.report_count(filtered.len())?;
    if filtered.is_empty() {
        eprintln!("Warning: no records match the selection; the chart will show zero-height bars");
    }
    let averages = aggregate::average_prices(&filtered);

    // Build and write the chart
    let spec = chart::build_chart(&selection, &averages);
    let png_bytes =
        render::render_png(&spec, &RenderOptions::default()).context("Failed to render chart")?;
    fs::write(&args.output, &png_bytes)
        .with_context(|| format!("Failed to write chart to '{}'", args.output.display()))?;
    println!("Chart written to {}", args.output.display());

    Ok(())
}
