use std::time::Duration;

use uuid::Uuid;

use crate::events::{now_rfc3339, EventBus, EventSink, FeedEvent};
use crate::models::{Actor, LiveMetrics};
use crate::services::feed_selector::FeedSelector;
use crate::services::live_metrics::MetricsTicker;
use crate::services::notification_store::NotificationStore;

/// Everything owned by one signed-in actor, created at sign-in and consumed at logout
pub struct PortalSession {
    id: String,
    actor: Actor,
    started_at: String,
    store: NotificationStore,
    metrics: Option<MetricsTicker>,
    events: EventSink,
}

impl PortalSession {
    /// Seed a fresh session for `actor`
    pub fn start(actor: Actor, selector: &FeedSelector, bus: EventBus) -> Self {
        let id = Uuid::new_v4().to_string();
        let started_at = now_rfc3339();
        let events = EventSink::new(bus, id.clone());

        let store =
            NotificationStore::new(selector.select(actor.role)).with_events(events.clone());

        tracing::info!(
            "Session {} started for {} ({}) with {} notifications, {} unread",
            id,
            actor.email,
            actor.role,
            store.len(),
            store.unread_count()
        );

        events.publish(FeedEvent::FeedSeeded {
            session_id: id.clone(),
            role: actor.role,
            count: store.len(),
            unread_count: store.unread_count(),
            timestamp: started_at.clone(),
        });

        Self {
            id,
            actor,
            started_at,
            store,
            metrics: None,
            events,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.store
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationStore {
        &mut self.store
    }

    /// Start refreshing live metrics. Replaces (and cancels) any running ticker.
    pub fn start_live_metrics(&mut self, period: Duration) {
        let ticker = MetricsTicker::start(
            LiveMetrics::default(),
            period,
            Some(self.events.clone()),
        );
        self.attach_ticker(ticker);
    }

    pub fn attach_ticker(&mut self, ticker: MetricsTicker) {
        if self.metrics.replace(ticker).is_some() {
            tracing::debug!("Session {} replaced its live metrics ticker", self.id);
        }
    }

    pub fn live_metrics(&self) -> Option<LiveMetrics> {
        self.metrics.as_ref().map(|ticker| ticker.latest().metrics)
    }

    pub fn has_live_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Log out: stop background work and discard the feed
    pub async fn end(mut self) {
        if let Some(ticker) = self.metrics.take() {
            ticker.stop().await;
        }

        tracing::info!("Session {} ended for {}", self.id, self.actor.email);

        self.events.publish(FeedEvent::SessionEnded {
            session_id: self.id.clone(),
            timestamp: now_rfc3339(),
        });
    }
}
