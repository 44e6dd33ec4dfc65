//! Live Update Feed
//!
//! Bounded, newest-first list of tracker status messages.
//!
//! The periodic messages are a demo simulation: they are picked at random from
//! a fixed pool and do not reflect any real telemetry.

use std::collections::VecDeque;

/// Maximum number of updates kept
pub const MAX_UPDATES: usize = 5;

pub const INITIALIZED_MESSAGE: &str = "Tracking system initialized";
pub const LOCATION_UPDATED_MESSAGE: &str = "Location updated successfully - GPS coordinates refreshed";

/// Pool for the simulated (demo-only) status messages
pub const SIMULATED_MESSAGES: &[&str] = &[
    "GPS signal strong",
    "Weather conditions favorable",
    "Traffic is light on your route",
    "Local recommendations updated",
];

#[derive(Debug, Clone, PartialEq)]
pub struct LiveUpdate {
    /// Creation time in milliseconds since the epoch
    pub id: u64,
    /// Display time, already localized
    pub time: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveFeed {
    entries: VecDeque<LiveUpdate>,
}

impl LiveFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an update at the front, dropping the oldest beyond the cap
    pub fn push(&mut self, update: LiveUpdate) {
        self.entries.push_front(update);
        self.entries.truncate(MAX_UPDATES);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Updates, newest first
    pub fn iter(&self) -> impl Iterator<Item = &LiveUpdate> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<LiveUpdate> {
        self.entries.iter().cloned().collect()
    }
}

/// Probability gate and message choice for one simulation tick.
///
/// `roll` and `pick` are uniform samples in `[0, 1)`. A message is emitted when
/// `roll` exceeds `1 - chance`.
pub fn simulated_message(roll: f64, pick: f64, chance: f64) -> Option<&'static str> {
    if roll <= 1.0 - chance {
        return None;
    }
    let idx = ((pick * SIMULATED_MESSAGES.len() as f64) as usize).min(SIMULATED_MESSAGES.len() - 1);
    Some(SIMULATED_MESSAGES[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(id: u64) -> LiveUpdate {
        LiveUpdate { id, time: format!("t{}", id), message: format!("m{}", id) }
    }

    #[test]
    fn test_never_exceeds_cap_and_stays_newest_first() {
        let mut feed = LiveFeed::new();
        for id in 1..=12 {
            feed.push(update(id));
            assert!(feed.len() <= MAX_UPDATES);
            let ids: Vec<u64> = feed.iter().map(|u| u.id).collect();
            assert!(ids.windows(2).all(|w| w[0] > w[1]), "not newest-first: {:?}", ids);
        }
        let ids: Vec<u64> = feed.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn test_simulation_respects_chance() {
        assert_eq!(simulated_message(0.8, 0.0, 0.2), None);
        assert_eq!(simulated_message(0.1, 0.0, 0.2), None);
        assert_eq!(simulated_message(0.81, 0.0, 0.2), Some("GPS signal strong"));
        assert_eq!(simulated_message(0.99, 0.999, 0.2), Some("Local recommendations updated"));
    }

    #[test]
    fn test_simulation_pick_is_clamped() {
        assert_eq!(simulated_message(0.99, 1.0, 0.2), Some("Local recommendations updated"));
    }
}
