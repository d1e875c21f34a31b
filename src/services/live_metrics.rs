use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::events::{now_rfc3339, EventSink, FeedEvent};
use crate::models::{LiveMetrics, MetricsSample};

/// Background task refreshing the live analytics numbers on a fixed period.
///
/// The task is bound to this handle: `stop` cancels and joins it, dropping the
/// handle cancels it.
pub struct MetricsTicker {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
    rx: watch::Receiver<MetricsSample>,
}

impl MetricsTicker {
    /// Start refreshing `initial` every `period`. Must be called inside a tokio runtime.
    pub fn start(initial: LiveMetrics, period: Duration, events: Option<EventSink>) -> Self {
        Self::start_with_rng(initial, period, events, StdRng::from_entropy())
    }

    pub fn start_with_rng(
        initial: LiveMetrics,
        period: Duration,
        events: Option<EventSink>,
        mut rng: StdRng,
    ) -> Self {
        let (tx, rx) = watch::channel(MetricsSample {
            metrics: initial,
            tick: 0,
            refreshed_at: now_rfc3339(),
        });
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            info!("Starting live metrics refresh every {:?}", period);

            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately
            interval.tick().await;

            let mut current = initial;
            let mut tick = 0u64;

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        current = current.jitter(&mut rng);
                        tick += 1;

                        let sample = MetricsSample {
                            metrics: current,
                            tick,
                            refreshed_at: now_rfc3339(),
                        };
                        debug!(
                            "Live metrics refreshed (tick {}): {} active users, {} applications today",
                            tick, current.active_users, current.today_applications
                        );

                        if let Some(events) = &events {
                            events.publish(FeedEvent::MetricsRefreshed {
                                session_id: events.session_id().to_string(),
                                sample: sample.clone(),
                            });
                        }
                        tx.send_replace(sample);
                    }
                }
            }

            info!("Live metrics refresh stopped after {} ticks", tick);
        });

        Self {
            token,
            handle: Some(handle),
            rx,
        }
    }

    pub fn latest(&self) -> MetricsSample {
        self.rx.borrow().clone()
    }

    /// Receiver notified on every refresh
    pub fn subscribe(&self) -> watch::Receiver<MetricsSample> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Cancel the refresh task and wait for it to exit
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::error!("Live metrics task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for MetricsTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
