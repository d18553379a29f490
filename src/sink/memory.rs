//! In-Memory Sink
//!
//! Accumulates every event it sees. Used by tests and by callers that want
//! the whole run as a batch (e.g. JSON export) instead of live rendering.

use super::{EventSink, SinkError};
use crate::monitor::MonitorEvent;

/// Collects events in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<MonitorEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MonitorEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// One JSON line per event, in emission order
    pub fn to_jsonl(&self) -> String {
        self.events
            .iter()
            .map(MonitorEvent::to_jsonl)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: &MonitorEvent) -> Result<(), SinkError> {
        self.events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str) -> MonitorEvent {
        MonitorEvent {
            sequence_id: id.to_string(),
            timestamp: "09:00:00".to_string(),
            processed_count: 1,
            normal_count: 1,
            attack_count: 0,
            anomaly_score: 0.3,
            threshold: 0.5,
            score_history: vec![0.3],
            alert: None,
        }
    }

    #[test]
    fn test_collects_in_emission_order() {
        let mut sink = MemorySink::new();
        sink.emit(&event("PKT-1000")).unwrap();
        sink.emit(&event("PKT-1001")).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0].sequence_id, "PKT-1000");
        assert_eq!(sink.events()[1].sequence_id, "PKT-1001");
    }

    #[test]
    fn test_jsonl_has_one_line_per_event() {
        let mut sink = MemorySink::new();
        sink.emit(&event("PKT-1000")).unwrap();
        sink.emit(&event("PKT-1001")).unwrap();

        let jsonl = sink.to_jsonl();
        assert_eq!(jsonl.lines().count(), 2);
        assert!(jsonl.lines().next().unwrap().contains("PKT-1000"));
    }
}
