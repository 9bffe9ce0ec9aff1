use clap::{Args, Parser, Subcommand};

use crate::scrape::{LISTING_URL, OUTPUT_FILE, PAGE_SIZE};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the stolen-bike listing into a CSV file.
    Scrape(ScrapeArgs),
    /// Re-classify rows whose category is still "Other" by brand lookup.
    Classify(ClassifyArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Listing URL to traverse (must be http/https).
    #[arg(long, default_value = LISTING_URL)]
    pub url: String,

    /// Results per listing page.
    #[arg(long, default_value_t = PAGE_SIZE)]
    pub page_size: u32,

    /// Output CSV path.
    #[arg(long, default_value = OUTPUT_FILE)]
    pub out: String,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input CSV (first column is the title, last column the category).
    #[arg(long, default_value = OUTPUT_FILE)]
    pub input: String,

    /// Output CSV path (default: rewrite the input in place).
    #[arg(long)]
    pub out: Option<String>,
}
