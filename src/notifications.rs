//! Notification badge shown next to a signed-in user's menu.
//!
//! Four independent counters feed a derived total. The total is cached and
//! only recomputed after one of the counters changes.

use serde::Serialize;
use strum::Display;
use tokio::sync::Mutex;

/// Counters rendered past this value collapse to `"99+"`
pub const LABEL_CAP: u64 = 99;

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Counter {
    Network,
    Jobs,
    Messaging,
    Notifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub network: u64,
    pub jobs: u64,
    pub messaging: u64,
    pub notifications: u64,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            network: 102,
            jobs: 0,
            messaging: 0,
            notifications: 12,
        }
    }
}

impl Counters {
    fn slot(&mut self, counter: Counter) -> &mut u64 {
        match counter {
            Counter::Network => &mut self.network,
            Counter::Jobs => &mut self.jobs,
            Counter::Messaging => &mut self.messaging,
            Counter::Notifications => &mut self.notifications,
        }
    }
}

pub fn total_notifications(counters: &Counters) -> u64 {
    counters
        .network
        .saturating_add(counters.jobs)
        .saturating_add(counters.messaging)
        .saturating_add(counters.notifications)
}

pub fn label(value: u64) -> String {
    if value > LABEL_CAP {
        format!("{LABEL_CAP}+")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub network: String,
    pub jobs: String,
    pub messaging: String,
    pub notifications: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub counters: Counters,
    pub total: u64,
    pub labels: Labels,
}

#[derive(Debug, Default)]
struct State {
    counters: Counters,
    version: u64,
    /// Total paired with the counter version it was computed for
    cached: Option<(u64, u64)>,
    #[cfg(test)]
    recomputed: usize,
}

impl State {
    fn total(&mut self) -> u64 {
        match self.cached {
            Some((version, total)) if version == self.version => total,
            _ => {
                let total = total_notifications(&self.counters);
                self.cached = Some((self.version, total));
                #[cfg(test)]
                {
                    self.recomputed += 1;
                }
                total
            }
        }
    }

    fn snapshot(&mut self) -> Snapshot {
        let total = self.total();
        let counters = self.counters;

        Snapshot {
            counters,
            total,
            labels: Labels {
                network: label(counters.network),
                jobs: label(counters.jobs),
                messaging: label(counters.messaging),
                notifications: label(counters.notifications),
            },
        }
    }
}

/// Process-wide badge shared through the router state
#[derive(Debug, Default)]
pub struct Badge(Mutex<State>);

impl Badge {
    pub async fn snapshot(&self) -> Snapshot {
        self.0.lock().await.snapshot()
    }

    pub async fn increment(&self, counter: Counter) -> Snapshot {
        let mut state = self.0.lock().await;
        let slot = state.counters.slot(counter);
        *slot = slot.saturating_add(1);
        state.version += 1;

        tracing::debug!(counter = %counter, "Badge counter incremented");

        state.snapshot()
    }

    #[cfg(test)]
    async fn set(&self, counter: Counter, value: u64) -> Snapshot {
        let mut state = self.0.lock().await;
        let slot = state.counters.slot(counter);
        if *slot != value {
            *slot = value;
            state.version += 1;
        }

        state.snapshot()
    }

    #[cfg(test)]
    async fn recomputed(&self) -> usize {
        self.0.lock().await.recomputed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_caps_at_99() {
        assert_eq!(label(0), "0");
        assert_eq!(label(99), "99");
        assert_eq!(label(100), "99+");
        assert_eq!(label(102), "99+");
    }

    #[test]
    fn test_default_total() {
        assert_eq!(total_notifications(&Counters::default()), 114);
    }

    #[tokio::test]
    async fn test_default_snapshot() {
        let snapshot = Badge::default().snapshot().await;

        assert_eq!(snapshot.total, 114);
        assert_eq!(snapshot.labels.network, "99+");
        assert_eq!(snapshot.labels.notifications, "12");
    }

    #[tokio::test]
    async fn test_total_recomputed_only_after_change() {
        let badge = Badge::default();

        badge.snapshot().await;
        badge.snapshot().await;
        assert_eq!(badge.recomputed().await, 1);

        let snapshot = badge.increment(Counter::Messaging).await;
        assert_eq!(snapshot.counters.messaging, 1);
        assert_eq!(snapshot.total, 115);
        badge.snapshot().await;
        assert_eq!(badge.recomputed().await, 2);

        // Writing the same value is not a change
        badge.set(Counter::Jobs, 0).await;
        assert_eq!(badge.recomputed().await, 2);

        let snapshot = badge.set(Counter::Jobs, 5).await;
        assert_eq!(snapshot.total, 120);
        assert_eq!(badge.recomputed().await, 3);
    }

    #[test]
    fn test_counter_names_are_lowercase() {
        assert_eq!(Counter::Messaging.to_string(), "messaging");
        assert_eq!(Counter::Network.to_string(), "network");
    }
}
