use anyhow::Context;
use placement_portal::config::Config;
use placement_portal::events::{EventBus, FeedEvent};
use placement_portal::infrastructure::observability;
use placement_portal::models::Actor;
use placement_portal::services::{render_feed, FeedSelector, PortalSession};
use tokio_stream::StreamExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    observability::init(&config).context("Failed to initialise tracing")?;
    tracing::info!("Configuration loaded");

    let bus = EventBus::new(config.event_bus_capacity);
    let mut events = Box::pin(bus.stream());
    let listener = tokio::spawn(async move {
        while let Some(event) = events.next().await {
            match event {
                FeedEvent::MetricsRefreshed { sample, .. } => {
                    tracing::info!(
                        "Live metrics (tick {}): {} active users, {} applications today, {:.1}% health",
                        sample.tick,
                        sample.metrics.active_users,
                        sample.metrics.today_applications,
                        sample.metrics.system_health
                    );
                }
                FeedEvent::SessionEnded { .. } => break,
                other => tracing::debug!("Feed event: {:?}", other),
            }
        }
    });

    let actor = Actor::demo_for_role(config.role);
    let mut session = PortalSession::start(actor, &FeedSelector::new(), bus);

    let view = render_feed(session.notifications().notifications());
    println!(
        "{}",
        serde_json::to_string_pretty(&view).context("Failed to serialize feed view")?
    );

    if config.live_metrics_enabled {
        session.start_live_metrics(config.metrics_refresh_interval());
        tracing::info!("Live metrics running, press Ctrl-C to end the session");
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl-C")?;
    }

    session.end().await;

    if let Err(e) = listener.await {
        tracing::error!("Event listener ended abnormally: {}", e);
    }

    Ok(())
}
