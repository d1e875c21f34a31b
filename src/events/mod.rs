use crate::models::{ActorRole, MetricsSample};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

/// Events emitted as a session's feed and metrics change
#[derive(Debug, Clone)]
pub enum FeedEvent {
    FeedSeeded {
        session_id: String,
        role: ActorRole,
        count: usize,
        unread_count: usize,
        timestamp: String, // ISO 8601
    },
    NotificationRead {
        session_id: String,
        notification_id: String,
        unread_count: usize,
        timestamp: String, // ISO 8601
    },
    AllNotificationsRead {
        session_id: String,
        marked: usize,
        unread_count: usize,
        timestamp: String, // ISO 8601
    },
    NotificationDeleted {
        session_id: String,
        notification_id: String,
        remaining: usize,
        unread_count: usize,
        timestamp: String, // ISO 8601
    },
    MetricsRefreshed {
        session_id: String,
        sample: MetricsSample,
    },
    SessionEnded {
        session_id: String,
        timestamp: String, // ISO 8601
    },
}

impl FeedEvent {
    pub fn session_id(&self) -> &str {
        match self {
            FeedEvent::FeedSeeded { session_id, .. }
            | FeedEvent::NotificationRead { session_id, .. }
            | FeedEvent::AllNotificationsRead { session_id, .. }
            | FeedEvent::NotificationDeleted { session_id, .. }
            | FeedEvent::MetricsRefreshed { session_id, .. }
            | FeedEvent::SessionEnded { session_id, .. } => session_id,
        }
    }
}

/// Event bus the display layer subscribes to
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<FeedEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to all subscribers (non-blocking, fire-and-forget)
    pub fn publish(&self, event: FeedEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("Failed to publish feed event (no subscribers): {}", e);
        }
    }

    /// Subscribe to events (returns a receiver)
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.tx.subscribe()
    }

    /// Subscribe as a stream. Lagged receivers skip the missed events.
    pub fn stream(&self) -> impl Stream<Item = FeedEvent> + Send + 'static {
        BroadcastStream::new(self.tx.subscribe()).filter_map(|item| match item {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Feed event subscriber lagged: {}", e);
                None
            }
        })
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Publishes events on behalf of one session
#[derive(Clone)]
pub struct EventSink {
    bus: EventBus,
    session_id: String,
}

impl EventSink {
    pub fn new(bus: EventBus, session_id: impl Into<String>) -> Self {
        Self {
            bus,
            session_id: session_id.into(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn publish(&self, event: FeedEvent) {
        self.bus.publish(event);
    }
}

/// Current time formatted as RFC 3339
pub fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}
