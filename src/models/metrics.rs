use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SYSTEM_HEALTH_FLOOR: f64 = 95.0;
pub const SYSTEM_HEALTH_CEILING: f64 = 100.0;

/// Headline numbers on the real-time analytics panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMetrics {
    pub active_users: u32,
    pub online_recruiters: u32,
    pub today_applications: u32,
    pub interviews_scheduled: u32,
    pub placements_this_week: u32,
    /// Percentage, kept within [95, 100] by every refresh
    pub system_health: f64,
}

impl Default for LiveMetrics {
    fn default() -> Self {
        Self {
            active_users: 247,
            online_recruiters: 12,
            today_applications: 18,
            interviews_scheduled: 5,
            placements_this_week: 3,
            system_health: 98.0,
        }
    }
}

impl LiveMetrics {
    /// Apply one round of bounded random drift.
    ///
    /// Active users move by -5..=4, today's applications grow by 0..=2 and
    /// system health drifts by less than one point, clamped to [95, 100].
    pub fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let user_delta: i64 = rng.gen_range(-5..5);
        let active_users = (i64::from(self.active_users) + user_delta).max(0) as u32;

        let today_applications = self.today_applications + rng.gen_range(0..3);

        let health_delta: f64 = rng.gen_range(-1.0..1.0);
        let system_health =
            (self.system_health + health_delta).clamp(SYSTEM_HEALTH_FLOOR, SYSTEM_HEALTH_CEILING);

        Self {
            active_users,
            today_applications,
            system_health,
            ..*self
        }
    }
}

/// Latest published metrics together with when they were produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSample {
    pub metrics: LiveMetrics,
    /// Number of refreshes applied since the ticker started
    pub tick: u64,
    pub refreshed_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Period-over-period change shown next to a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeIndicator {
    pub trend: Trend,
    /// Absolute percentage change
    pub percent: f64,
}

/// Percentage change from `previous` to `current`.
///
/// A flat value counts as `Down`. Returns `None` when `previous` is zero.
pub fn change_indicator(current: f64, previous: f64) -> Option<ChangeIndicator> {
    if previous == 0.0 {
        return None;
    }

    let change = (current - previous) / previous * 100.0;
    let trend = if change > 0.0 { Trend::Up } else { Trend::Down };

    Some(ChangeIndicator {
        trend,
        percent: change.abs(),
    })
}
