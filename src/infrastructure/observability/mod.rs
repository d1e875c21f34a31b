use crate::config::Config;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at debug.
pub fn init(config: &Config) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "placement_portal=debug".into());

    Registry::default().with(env_filter).with(fmt_layer).try_init()?;

    tracing::debug!("Tracing initialised for {}", config.service_name);
    Ok(())
}
