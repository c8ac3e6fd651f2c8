//! Summarize a sales CSV file
//!
//! Run with:
//!   DATASET_FILE_NAME=sales_data.csv RUST_LOG=debug \
//!     cargo run -p sales-summary --example summarize_csv -- '{"filters": {"category": ["Toys"]}}'
//!
//! The optional argument is a JSON request; without it every column is
//! summarized over every row.

use anyhow::Context;
use sales_dataset::DatasetSettings;
use sales_summary::{EngineConfig, SummaryRequest, SummaryService};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let request: SummaryRequest = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json).context("invalid request")?,
        None => SummaryRequest::default(),
    };

    let settings = DatasetSettings::from_env();
    let service = SummaryService::start(&settings, EngineConfig::default());

    let report = service
        .summarize(&request)
        .with_context(|| format!("summarizing {}", settings.file_name.display()))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
