//! Collector Poll Loop
//!
//! Background task that refreshes the status cache from the collector.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::client::CollectorClient;
use crate::cache::StatusCache;
use crate::error::CollectorError;
use crate::models::WorkloadStatus;

pub struct Poller {
    client: CollectorClient,
    cache: Arc<StatusCache>,
    period: Duration,
}

impl Poller {
    pub fn new(client: CollectorClient, cache: Arc<StatusCache>, period: Duration) -> Self {
        Self { client, cache, period }
    }

    /// Run one fetch-and-replace cycle.
    ///
    /// On any failure the cache is left exactly as it was.
    pub async fn poll_once(&self) -> Result<usize, CollectorError> {
        let reports = self.client.fetch_reports().await?;
        let checked_at = Utc::now();

        let count = reports.len();
        self.cache.replace_all(
            reports
                .iter()
                .map(|report| (report.key(), WorkloadStatus::from_report(report, checked_at))),
        );

        Ok(count)
    }

    /// Poll immediately, then once per period, for as long as the runtime lives
    pub async fn run(self) {
        tracing::info!(
            "Polling Attestation Collector at {} every {}s",
            self.client.base_url(),
            self.period.as_secs()
        );

        let poller = &self;
        drive(self.period, move || async move {
            match poller.poll_once().await {
                Ok(count) => {
                    tracing::info!("Fetched {} reports from Collector", count);
                }
                Err(e) => {
                    tracing::warn!("Collector poll failed, keeping {} cached workloads: {}", poller.cache.len(), e);
                }
            }
        })
        .await
    }

    /// Spawn [`Poller::run`] onto the current runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

/// Run `cycle` at once, then on every tick of `period`.
/// A cycle that overruns the period is followed by a single catch-up run,
/// after which the schedule realigns to multiples of `period`.
async fn drive<F, Fut>(period: Duration, mut cycle: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // first tick completes immediately
        ticker.tick().await;
        cycle().await;
    }
}
