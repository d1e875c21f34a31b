use std::env;
use std::time::Duration;

use crate::models::ActorRole;

#[derive(Clone, Debug)]
pub struct Config {
    pub role: ActorRole,
    pub live_metrics_enabled: bool,
    pub metrics_refresh_secs: u64,
    pub event_bus_capacity: usize,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let role_name = lookup("PORTAL_ROLE").unwrap_or_else(|| "student".to_string());
        let role = ActorRole::parse_lenient(&role_name)
            .map_err(|_| ConfigError::UnknownRole(role_name.clone()))?;

        let live_metrics_enabled = match lookup("LIVE_METRICS_ENABLED") {
            None => true,
            Some(value) => {
                let flag = value.trim().to_lowercase();
                match flag.as_str() {
                    "1" | "true" | "yes" | "on" => true,
                    "0" | "false" | "no" | "off" => false,
                    _ => return Err(ConfigError::InvalidFlag("LIVE_METRICS_ENABLED", value)),
                }
            }
        };

        let metrics_refresh_secs = lookup("METRICS_REFRESH_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidRefreshInterval)?;

        let event_bus_capacity = lookup("EVENT_BUS_CAPACITY")
            .unwrap_or_else(|| "100".to_string())
            .parse()
            .unwrap_or(100);

        let service_name =
            lookup("SERVICE_NAME").unwrap_or_else(|| "placement-portal".to_string());

        Ok(Config {
            role,
            live_metrics_enabled,
            metrics_refresh_secs,
            event_bus_capacity,
            service_name,
        })
    }

    pub fn metrics_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_refresh_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORTAL_ROLE must be one of student, placement_staff, faculty_mentor, recruiter (got {0:?})")]
    UnknownRole(String),

    #[error("METRICS_REFRESH_SECS must be a positive number of seconds")]
    InvalidRefreshInterval,

    #[error("{0} must be a boolean (got {1:?})")]
    InvalidFlag(&'static str, String),
}
