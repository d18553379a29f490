//! Monitor State - process-lifetime aggregates
//!
//! Counters, the rolling score history, and the session alert log. Alerts
//! are most-recent-first and survive until the state is reset; display
//! sinks truncate, the state never does.

use super::event::AlertRecord;
use super::history::ScoreHistory;

/// Aggregate state owned by the monitor
///
/// Invariant: `attacks <= processed` at all times.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    processed: u64,
    attacks: u64,
    history: ScoreHistory,
    /// Most-recent-first session journal
    alerts: Vec<AlertRecord>,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Packets analyzed so far
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Intrusions detected so far
    pub fn attacks(&self) -> u64 {
        self.attacks
    }

    /// Legitimate traffic count
    pub fn normal(&self) -> u64 {
        self.processed - self.attacks
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// The `n` most recent alerts, newest first
    pub fn recent_alerts(&self, n: usize) -> &[AlertRecord] {
        &self.alerts[..n.min(self.alerts.len())]
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Record one processed packet; the alert (if any) must belong to it
    pub fn record_tick(&mut self, score: f32, alert: Option<AlertRecord>) {
        self.processed += 1;
        if let Some(alert) = alert {
            self.attacks += 1;
            self.alerts.insert(0, alert);
        }
        self.history.push(score);
    }

    /// Clear counters, history, and the alert journal
    pub fn reset(&mut self) {
        self.processed = 0;
        self.attacks = 0;
        self.history.clear();
        self.alerts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HISTORY_CAPACITY;

    fn alert(id: &str) -> AlertRecord {
        AlertRecord::new(id.to_string(), "10:00:00".to_string(), 0.9)
    }

    #[test]
    fn test_counters_track_ticks() {
        let mut state = MonitorState::new();
        state.record_tick(0.2, None);
        state.record_tick(0.9, Some(alert("PKT-1001")));
        state.record_tick(0.1, None);

        assert_eq!(state.processed(), 3);
        assert_eq!(state.attacks(), 1);
        assert_eq!(state.normal(), 2);
        assert!(state.attacks() <= state.processed());
    }

    #[test]
    fn test_alerts_are_most_recent_first() {
        let mut state = MonitorState::new();
        state.record_tick(0.9, Some(alert("PKT-1000")));
        state.record_tick(0.9, Some(alert("PKT-1001")));

        let recent = state.recent_alerts(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].sequence_id, "PKT-1001");
        assert_eq!(recent[1].sequence_id, "PKT-1000");
    }

    #[test]
    fn test_recent_alerts_truncates_only_the_view() {
        let mut state = MonitorState::new();
        for i in 0..15 {
            state.record_tick(0.9, Some(alert(&format!("PKT-{}", 1000 + i))));
        }
        assert_eq!(state.recent_alerts(10).len(), 10);
        assert_eq!(state.alert_count(), 15);
    }

    #[test]
    fn test_history_saturates_at_capacity() {
        let mut state = MonitorState::new();
        for i in 0..60 {
            state.record_tick(i as f32 / 100.0, None);
        }
        assert_eq!(state.history().len(), HISTORY_CAPACITY);
        // Oldest entries evicted; window starts at tick 10.
        assert_eq!(state.history().snapshot()[0], 0.10);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = MonitorState::new();
        state.record_tick(0.9, Some(alert("PKT-1000")));
        state.reset();

        assert_eq!(state.processed(), 0);
        assert_eq!(state.attacks(), 0);
        assert_eq!(state.alert_count(), 0);
        assert!(state.history().is_empty());
    }
}
