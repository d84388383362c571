//! creations-stats entry point.
//!
//! Scrapes engagement stats for one or more published creations and appends
//! them to a CSV file. Logging goes to stderr so stdout stays clean for
//! shell pipelines.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use creations_client::{FetchClient, FetchConfig, extract_rows, parse_creation_url};
use creations_core::{AppConfig, Identity, Platform, StatRow};

mod sink;

/// Scrape per-platform stats for published creations into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "creations-stats", version)]
struct Args {
    /// Output CSV file; created with a header on first use, appended to
    /// afterwards.
    output: PathBuf,

    /// Creation details URLs to scrape.
    #[arg(required = true)]
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;
    let client = FetchClient::new(FetchConfig::from(&config)).context("failed to build fetch client")?;

    let mut all_rows = Vec::new();
    for url in &args.urls {
        let rows = scrape_one(&client, &config, url)
            .await
            .with_context(|| format!("failed to scrape {url}"))?;
        all_rows.extend(rows);
    }

    sink::append_rows(&args.output, &all_rows).context("failed to write CSV output")?;

    println!("Wrote {} rows to {}", all_rows.len(), args.output.display());

    Ok(())
}

/// Scrape one creation URL into stat rows.
///
/// Payload first; the rendered page is fetched only when no payload could
/// be obtained. Whatever the sources yield, the extraction engine returns
/// at least one row.
async fn scrape_one(client: &FetchClient, config: &AppConfig, url: &str) -> Result<Vec<StatRow>> {
    let creation = parse_creation_url(url, &config.allowed_host)?;

    let identity = Identity {
        date: Local::now().date_naive(),
        creation_id: creation.creation_id.clone(),
        slug: creation.slug.clone(),
        url: creation.url.to_string(),
    };

    let payload = client.fetch_payload(&creation.creation_id).await;

    let text = if payload.is_none() {
        match client.fetch_page_text(&creation.url).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(url, error = %e, "page text fetch failed");
                None
            }
        }
    } else {
        None
    };

    let (payload, source) = match payload {
        Some((value, endpoint)) => (Some(value), Some(endpoint)),
        None => (None, None),
    };

    let rows = extract_rows(payload.as_ref(), text.as_deref(), &identity);

    match (&source, rows.first().map(|r| r.platform)) {
        (Some(endpoint), Some(platform)) if platform != Platform::Unknown => {
            tracing::info!(url, endpoint = %endpoint, rows = rows.len(), "extracted stats from API payload");
        }
        (None, Some(platform)) if platform != Platform::Unknown => {
            tracing::info!(url, rows = rows.len(), "extracted stats from visible text fallback");
        }
        _ => {
            tracing::warn!(url, "API and text extraction yielded no stats; writing Unknown row");
        }
    }

    Ok(rows)
}
