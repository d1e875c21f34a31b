use std::time::Duration;

use placement_portal::events::{EventBus, FeedEvent};
use placement_portal::models::{Actor, ActorRole, LiveMetrics};
use placement_portal::services::feed_selector::baseline_feed;
use placement_portal::services::{render_feed, FeedSelector, MetricsTicker, PortalSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::test]
async fn test_session_lifecycle_events() {
    let bus = EventBus::new(32);
    let mut rx = bus.subscribe();

    let mut session = PortalSession::start(
        Actor::demo_for_role(ActorRole::Student),
        &FeedSelector::new(),
        bus,
    );
    let session_id = session.id().to_string();

    session.notifications_mut().mark_read("1");
    session.notifications_mut().delete("2");
    session.end().await;

    let mut received = Vec::new();
    while let Ok(event) = rx.try_recv() {
        assert_eq!(event.session_id(), session_id);
        received.push(event);
    }

    assert_eq!(received.len(), 4);
    assert!(matches!(received[0], FeedEvent::FeedSeeded { count: 3, unread_count: 2, .. }));
    assert!(matches!(received[1], FeedEvent::NotificationRead { unread_count: 1, .. }));
    assert!(matches!(
        received[2],
        FeedEvent::NotificationDeleted { remaining: 2, unread_count: 0, .. }
    ));
    assert!(matches!(received[3], FeedEvent::SessionEnded { .. }));
}

#[test]
fn test_unknown_role_falls_back_to_baseline_feed() {
    // Sessions need a parsed role; raw role strings degrade at the selector
    assert!("guest".parse::<ActorRole>().is_err());
    let feed = FeedSelector::new().select_by_name("guest");
    assert_eq!(feed, baseline_feed());
    assert_ne!(feed, FeedSelector::new().select(ActorRole::Recruiter));
}

#[tokio::test]
async fn test_metrics_refresh_published_on_bus() {
    let bus = EventBus::new(32);
    let mut rx = bus.subscribe();

    let mut session = PortalSession::start(
        Actor::demo_for_role(ActorRole::PlacementStaff),
        &FeedSelector::new(),
        bus,
    );
    session.start_live_metrics(Duration::from_millis(10));

    // Skip the seed event, then wait for a refresh
    let sample = loop {
        match rx.recv().await.unwrap() {
            FeedEvent::MetricsRefreshed { sample, .. } => break sample,
            _ => continue,
        }
    };
    assert!(sample.tick >= 1);
    assert!(sample.metrics.system_health >= 95.0);
    assert!(sample.metrics.system_health <= 100.0);

    session.end().await;
}

#[tokio::test]
async fn test_no_updates_after_stop() {
    let ticker = MetricsTicker::start_with_rng(
        LiveMetrics::default(),
        Duration::from_millis(5),
        None,
        StdRng::seed_from_u64(11),
    );
    let mut rx = ticker.subscribe();
    rx.changed().await.unwrap();

    ticker.stop().await;
    let last_tick = rx.borrow_and_update().tick;

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(rx.borrow().tick, last_tick);
    assert!(rx.changed().await.is_err());
}

#[tokio::test]
async fn test_replaced_ticker_is_cancelled() {
    let mut session = PortalSession::start(
        Actor::demo_for_role(ActorRole::Recruiter),
        &FeedSelector::new(),
        EventBus::default(),
    );

    let first = MetricsTicker::start(LiveMetrics::default(), Duration::from_millis(5), None);
    let mut first_rx = first.subscribe();
    session.attach_ticker(first);

    session.start_live_metrics(Duration::from_secs(3600));
    assert!(session.has_live_metrics());

    // The first ticker's task exits and drops its sender
    let closed = tokio::time::timeout(Duration::from_secs(2), async {
        while first_rx.changed().await.is_ok() {}
    })
    .await;
    assert!(closed.is_ok(), "replaced ticker kept running");

    session.end().await;
}

#[tokio::test]
async fn test_restarting_live_metrics_leaves_single_source() {
    let bus = EventBus::new(64);
    let mut rx = bus.subscribe();
    let mut session = PortalSession::start(
        Actor::demo_for_role(ActorRole::Student),
        &FeedSelector::new(),
        bus,
    );

    session.start_live_metrics(Duration::from_millis(5));
    session.start_live_metrics(Duration::from_millis(5));

    let mut ticks = Vec::new();
    while ticks.len() < 6 {
        if let FeedEvent::MetricsRefreshed { sample, .. } = rx.recv().await.unwrap() {
            ticks.push(sample.tick);
        }
    }
    assert_eq!(ticks, vec![1, 2, 3, 4, 5, 6]);

    session.end().await;
}

#[test]
fn test_rendered_feed_tracks_store() {
    tokio_test::block_on(async {
        let mut session = PortalSession::start(
            Actor::demo_for_role(ActorRole::Recruiter),
            &FeedSelector::new(),
            EventBus::default(),
        );

        let before = render_feed(session.notifications().notifications());
        assert_eq!(before.badge, Some(2));

        session.notifications_mut().mark_all_read();
        let after = render_feed(session.notifications().notifications());
        assert_eq!(after.badge, None);
        assert!(!after.show_mark_all_read);
        assert_eq!(after.entries.len(), 3);

        session.end().await;
    });
}
