pub mod feed_selector;
pub mod live_metrics;
pub mod notification_store;
pub mod presentation;
pub mod session_service;

pub use feed_selector::{select_feed, FeedRule, FeedSelector};
pub use live_metrics::MetricsTicker;
pub use notification_store::NotificationStore;
pub use presentation::*;
pub use session_service::PortalSession;
