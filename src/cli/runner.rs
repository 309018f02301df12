//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{FetchConfig, FetchConfigFile};
use crate::error::Result;
use crate::http::HttpFetcher;
use crate::pagination::Paginator;
use crate::types::{JsonValue, Page, PageItem};
use chrono::DateTime;
use futures::StreamExt;
use std::time::Instant;
use tracing::info;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                url,
                start,
                max_pages,
            } => self.fetch(url, *start, *max_pages).await,
            Commands::Config => self.show_config(),
        }
    }

    /// Build the fetch config: file (or defaults), then command-line overrides
    pub fn fetch_config(&self) -> Result<FetchConfig> {
        let mut file = match &self.cli.config {
            Some(path) => FetchConfigFile::from_file(path)?,
            None => FetchConfigFile::default(),
        };

        if let Some(max_retries) = self.cli.max_retries {
            file.max_retries = max_retries;
        }
        if let Some(ms) = self.cli.retry_delay_ms {
            file.retry_delay_ms = ms;
        }
        if let Some(ms) = self.cli.request_timeout_ms {
            file.request_timeout_ms = ms;
        }
        if let Some(ms) = self.cli.inter_page_delay_ms {
            file.inter_page_delay_ms = ms;
        }

        file.try_into()
    }

    async fn fetch(&self, url: &str, start: u64, max_pages: Option<usize>) -> Result<()> {
        Url::parse(url)?;
        let config = self.fetch_config()?;
        let paginator = Paginator::new(HttpFetcher::new()?, config);

        let started = Instant::now();
        let mut pages = paginator.paginate(url, start);
        if let Some(max_pages) = max_pages {
            pages = pages.take(max_pages).boxed();
        }

        info!("Fetching {url} starting after tid={start}");

        let mut page_count = 0;
        let mut trade_count = 0;
        while let Some(page) = pages.next().await {
            let page = page?;
            page_count += 1;
            trade_count += page.len();

            match self.cli.format {
                OutputFormat::Json => println!("{}", render_json(&page)?),
                OutputFormat::Pretty => println!("{}", render_pretty(&page)),
            }
        }

        info!(
            "Fetched {} page(s), {} trade(s) in {:?}",
            page_count,
            trade_count,
            started.elapsed()
        );
        Ok(())
    }

    fn show_config(&self) -> Result<()> {
        let config = FetchConfigFile::from(self.fetch_config()?);
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&config)?),
            OutputFormat::Pretty => print!("{}", serde_yaml::to_string(&config)?),
        }
        Ok(())
    }
}

/// One page as a single JSON line
pub fn render_json(page: &Page) -> Result<String> {
    Ok(serde_json::to_string(page)?)
}

const PRETTY_HEADER: [&str; 5] = ["tid", "type", "price", "amount", "date"];

/// One page as a fixed-width table
pub fn render_pretty(page: &Page) -> String {
    let rows: Vec<[String; 5]> = page.iter().map(pretty_row).collect();

    let mut widths = PRETTY_HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(&PRETTY_HEADER)];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_row(&cells));
    }
    lines.join("\n")
}

fn pretty_row(item: &PageItem) -> [String; 5] {
    [
        item.tid.to_string(),
        item.field("type").map(display_value).unwrap_or_default(),
        item.field("price").map(display_value).unwrap_or_default(),
        item.field("amount").map(display_value).unwrap_or_default(),
        item.field("date").map(display_date).unwrap_or_default(),
    ]
}

fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Unix seconds rendered as UTC, anything else shown verbatim
fn display_date(value: &JsonValue) -> String {
    value
        .as_i64()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(
            || display_value(value),
            |date| date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
}
