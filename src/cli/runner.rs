//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat};
use crate::config::FeedConfig;
use crate::controller::{FeedController, FeedState};
use crate::error::{Error, Result};
use crate::fetch::{PixabayFetcher, SearchFetcher};
use crate::notify::LogNotifier;
use crate::render::{HtmlGallery, RenderSink};
use crate::trigger::Throttle;
use crate::types::Image;
use serde::Serialize;
use tracing::info;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Search {
                query,
                max_pages,
                format,
            } => self.search(query, *max_pages, *format).await,
            Commands::Check => self.check().await,
        }
    }

    /// Resolve the effective config from flags, file, and environment
    fn config(&self) -> Result<FeedConfig> {
        let mut config = if let Some(path) = &self.cli.config {
            FeedConfig::from_file(path)?
        } else if let Some(key) = &self.cli.api_key {
            FeedConfig::new(key.clone())
        } else {
            FeedConfig::from_env()?
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key = key.clone();
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }

    async fn check(&self) -> Result<()> {
        let config = self.config()?;
        let fetcher = PixabayFetcher::new(config)?;

        match fetcher.fetch("flowers", 1).await {
            Ok(page) => {
                println!(
                    "Connection OK ({} total hits for probe query)",
                    page.total_hits
                );
                Ok(())
            }
            Err(e) => Err(Error::config(format!("connection check failed: {e}"))),
        }
    }

    async fn search(&self, query: &str, max_pages: u32, format: OutputFormat) -> Result<()> {
        let config = self.config()?;
        let fetcher = PixabayFetcher::new(config)?;

        match format {
            OutputFormat::Html => {
                let feed = self.drive(fetcher, HtmlGallery::new(), query, max_pages).await?;
                print!("{}", feed.sink().markup());
                Ok(())
            }
            OutputFormat::Json | OutputFormat::Pretty => {
                let feed = self
                    .drive(fetcher, CollectorSink::default(), query, max_pages)
                    .await?;
                self.emit(&feed, format)
            }
        }
    }

    /// Submit the query and page through the feed until it is exhausted,
    /// the page cap is reached, or a quiet transport failure stalls it.
    async fn drive<S: RenderSink>(
        &self,
        fetcher: PixabayFetcher,
        sink: S,
        query: &str,
        max_pages: u32,
    ) -> Result<FeedController<PixabayFetcher, S, LogNotifier>> {
        let mut feed = FeedController::new(fetcher, sink, LogNotifier);
        let throttle = Throttle::default();

        feed.submit(query).await?;

        while feed.state() == FeedState::Displaying {
            if max_pages > 0 && feed.stats().pages_fetched >= u64::from(max_pages) {
                info!(max_pages, "stopping at page cap");
                break;
            }
            // The terminal feed has no scroll events; pace page loads the
            // same way the scroll trigger would.
            throttle.wait().await;

            let failures_before = feed.stats().transport_failures;
            feed.load_more().await?;
            if feed.stats().transport_failures > failures_before {
                break;
            }
        }

        Ok(feed)
    }

    fn emit(
        &self,
        feed: &FeedController<PixabayFetcher, CollectorSink, LogNotifier>,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let report = SearchReport {
                    query: feed.session().query(),
                    total_pages: feed.total_pages(),
                    exhausted: feed.state().is_exhausted(),
                    images: &feed.sink().images,
                    stats: feed.stats(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Pretty => {
                for image in &feed.sink().images {
                    println!(
                        "{:<40} likes {:>6}  views {:>8}  {}",
                        image.tags, image.likes, image.views, image.webformat_url
                    );
                }
                println!(
                    "-- {} images over {} pages{}",
                    feed.stats().images_rendered,
                    feed.stats().pages_fetched,
                    if feed.state().is_exhausted() {
                        " (end of results)"
                    } else {
                        ""
                    }
                );
            }
            OutputFormat::Html => unreachable!("html handled before collection"),
        }
        Ok(())
    }
}

/// JSON report for `--format json`
#[derive(Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    total_pages: Option<u32>,
    exhausted: bool,
    images: &'a [Image],
    stats: &'a crate::controller::FeedStats,
}

/// Sink that keeps the image records for terminal output
#[derive(Debug, Default)]
struct CollectorSink {
    images: Vec<Image>,
}

impl RenderSink for CollectorSink {
    fn clear(&mut self) {
        self.images.clear();
    }

    fn append(&mut self, images: &[Image]) {
        self.images.extend_from_slice(images);
    }

    fn refresh_bindings(&mut self) {}

    fn show_loading(&mut self) {}

    fn hide_loading(&mut self) {}

    fn retire_load_more(&mut self) {}
}
