//! Background wallpaper updater.
//!
//! On every cycle one fetch job per market is queued on the worker pool. A
//! job fetches the market's archive and stores it; any failure is logged and
//! only affects that market's cycle.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info, warn};

use super::client::BingClient;
use super::pool::WorkerPool;
use crate::config::BingConfig;
use crate::db::Database;
use crate::locale::CountryCode;
use crate::wallpaper::{IngestReport, WallpaperService};
use crate::Result;

/// Name of the fetch worker pool.
pub const POOL_NAME: &str = "bing-fetch";

/// Fetch and store the archive of one market.
pub async fn update_market(
    db: &Database,
    client: &BingClient,
    country: CountryCode,
) -> Result<IngestReport> {
    let entries = client.request_archive(country).await?;
    debug!(country = %country, count = entries.len(), "Fetched image archive");
    WallpaperService::new(db).ingest(country, &entries).await
}

/// Periodic fetcher of every configured market.
pub struct WallpaperUpdater {
    db: Arc<Database>,
    client: Arc<BingClient>,
    pool: WorkerPool,
    countries: Vec<CountryCode>,
    update_interval: Duration,
}

impl WallpaperUpdater {
    /// Create an updater with its own worker pool.
    pub fn new(db: Arc<Database>, client: Arc<BingClient>, config: &BingConfig) -> Result<Self> {
        let countries = config.countries()?;
        Ok(Self {
            db,
            client,
            pool: WorkerPool::new(config.worker_count, config.queue_capacity, POOL_NAME),
            countries,
            update_interval: Duration::from_secs(config.update_interval_secs.max(1)),
        })
    }

    /// Markets fetched on every cycle.
    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    /// Time between cycles.
    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Queue one fetch job per market.
    ///
    /// Returns the number of jobs queued. Markets rejected by a full pool are
    /// skipped until the next cycle.
    pub fn run_once(&self) -> usize {
        let mut queued = 0;

        for &country in &self.countries {
            let db = Arc::clone(&self.db);
            let client = Arc::clone(&self.client);
            let job = async move {
                match update_market(&db, &client, country).await {
                    Ok(report) if report.stored > 0 => {
                        info!(country = %country, stored = report.stored, "Market updated");
                    }
                    Ok(_) => debug!(country = %country, "Market has no new wallpapers"),
                    Err(e) => error!(country = %country, "Failed to update market: {}", e),
                }
            };

            match self.pool.submit(job) {
                Ok(()) => queued += 1,
                Err(e) => warn!(country = %country, "Skipping market this cycle: {}", e),
            }
        }

        queued
    }

    /// Run the updater loop.
    ///
    /// The first cycle starts immediately.
    pub async fn run(&self) {
        info!(
            "Wallpaper updater started (interval: {} seconds, {} market(s))",
            self.update_interval.as_secs(),
            self.countries.len()
        );

        let mut timer = interval(self.update_interval);
        loop {
            timer.tick().await;
            let queued = self.run_once();
            debug!("Queued {} fetch job(s)", queued);
        }
    }

    /// Wait for queued jobs to finish and stop the workers.
    pub async fn shutdown(self) {
        self.pool.shutdown().await;
    }
}

/// Start the updater as a background task.
pub fn start_wallpaper_updater(updater: WallpaperUpdater) -> JoinHandle<()> {
    tokio::spawn(async move {
        updater.run().await;
    })
}
