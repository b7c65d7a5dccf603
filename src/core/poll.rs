//! Periodic market refresh with a pause guard.
//!
//! A single task owns the timer. On every tick it consults the pause flag
//! and only then fetches; a failed fetch is logged and dropped, leaving
//! the previous snapshot on screen until the next tick succeeds. The task
//! ends as soon as the receiving side goes away.

use crate::core::market::{AssetSnapshot, MarketProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub struct Poller<P: ?Sized> {
    provider: Arc<P>,
    interval: Duration,
}

impl<P: MarketProvider + ?Sized + 'static> Poller<P> {
    pub fn new(provider: Arc<P>, interval: Duration) -> Self {
        Self { provider, interval }
    }

    /// Starts the refresh loop. The first fetch happens immediately, then
    /// one per interval while `paused` reads false. Snapshots arrive on
    /// the returned channel; dropping the receiver stops the loop.
    pub fn spawn(
        self,
        paused: watch::Receiver<bool>,
    ) -> (mpsc::Receiver<Vec<AssetSnapshot>>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if *paused.borrow() {
                    debug!("Refresh tick skipped: paused");
                    continue;
                }

                match self.provider.fetch_markets().await {
                    Ok(assets) => {
                        if tx.send(assets).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        // Previous snapshot stays visible; the next tick
                        // is the retry.
                        warn!(error = %e, "Market refresh failed");
                    }
                }
            }
        });

        (rx, handle)
    }
}
