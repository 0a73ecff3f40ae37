use std::time::{Duration, Instant};

use memefactory_std::config::NetworkConfig;
use memefactory_std::gamm::query::PoolQuerier;
use tracing::{debug, warn};

/// Keeps the latest known number of pools on chain, refreshed at most once per interval. The
/// composer reads the cached value and never waits on a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCountPoller {
    interval: Duration,
    latest: Option<u64>,
    fetched_at: Option<Instant>,
    last_error: Option<String>,
}

impl PoolCountPoller {
    pub fn new(interval: Duration) -> Self {
        PoolCountPoller {
            interval,
            latest: None,
            fetched_at: None,
            last_error: None,
        }
    }

    pub fn for_network(config: &NetworkConfig) -> Self {
        Self::new(config.pool_count_refresh_interval())
    }

    pub fn latest(&self) -> Option<u64> {
        self.latest
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_stale(&self, now: Instant) -> bool {
        self.fetched_at
            .map_or(true, |at| now.saturating_duration_since(at) >= self.interval)
    }

    /// Queries the pool count if the cached one is older than the interval. A failed query keeps
    /// the previous count.
    pub fn poll<Q: PoolQuerier + ?Sized>(&mut self, querier: &Q, now: Instant) -> Option<u64> {
        if !self.is_stale(now) {
            return self.latest;
        }

        match querier.num_pools() {
            Ok(num_pools) => {
                debug!(num_pools, "pool count refreshed");
                self.latest = Some(num_pools);
                self.last_error = None;
            }
            Err(err) => {
                warn!(error = %err, previous = ?self.latest, "pool count query failed");
                self.last_error = Some(err.to_string());
            }
        }
        self.fetched_at = Some(now);

        self.latest
    }
}
