//! Monitor Events & Alert Records
//!
//! Immutable, timestamped records produced by the tick loop. One
//! `MonitorEvent` per processed packet; one `AlertRecord` per attack label,
//! never more, never fewer.

use serde::{Deserialize, Serialize};

// ============================================================================
// ALERT RECORD
// ============================================================================

/// What the system did with a flagged packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    Blocked,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Blocked => "blocked",
        }
    }
}

/// One detected intrusion; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Packet sequence id, e.g. "PKT-1042"
    pub sequence_id: String,
    /// Wall-clock time of the tick, "HH:MM:SS"
    pub timestamp: String,
    /// Attack probability the model assigned
    pub anomaly_score: f32,
    pub disposition: Disposition,
}

impl AlertRecord {
    pub fn new(sequence_id: String, timestamp: String, anomaly_score: f32) -> Self {
        Self {
            sequence_id,
            timestamp,
            anomaly_score,
            disposition: Disposition::Blocked,
        }
    }

    /// Display/export row with the operator-facing field values
    pub fn to_row(&self) -> AlertRow {
        AlertRow {
            time: self.timestamp.clone(),
            packet_id: self.sequence_id.clone(),
            anomaly_score_percent: format!("{:.2}%", self.anomaly_score * 100.0),
            detected_type: DETECTED_TYPE_MALICIOUS.to_string(),
            action: ACTION_BLOCKED.to_string(),
        }
    }
}

/// SOC journal value for the detected-type column (operator locale)
pub const DETECTED_TYPE_MALICIOUS: &str = "Malveillant";

/// SOC journal value for the action column (operator locale)
pub const ACTION_BLOCKED: &str = "BLOQUÉ";

/// Operator-facing alert journal row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRow {
    pub time: String,
    pub packet_id: String,
    pub anomaly_score_percent: String,
    pub detected_type: String,
    pub action: String,
}

// ============================================================================
// MONITOR EVENT
// ============================================================================

/// One tick's worth of monitoring output
///
/// Carries the updated KPI counters, the rolling score history for charting,
/// and the alert this tick produced (if the packet was labeled an attack).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorEvent {
    pub sequence_id: String,
    /// "HH:MM:SS"
    pub timestamp: String,
    pub processed_count: u64,
    pub normal_count: u64,
    pub attack_count: u64,
    /// Attack probability for this packet, in [0, 1]
    pub anomaly_score: f32,
    /// Adapter decision boundary; display annotation only
    pub threshold: f32,
    /// Most recent scores in arrival order (bounded)
    pub score_history: Vec<f32>,
    pub alert: Option<AlertRecord>,
}

impl MonitorEvent {
    /// Serialize for line-oriented export
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("Failed to serialize event {}: {}", self.sequence_id, e);
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_row_formatting() {
        let alert = AlertRecord::new("PKT-1007".to_string(), "12:30:45".to_string(), 0.932);
        let row = alert.to_row();
        assert_eq!(row.time, "12:30:45");
        assert_eq!(row.packet_id, "PKT-1007");
        assert_eq!(row.anomaly_score_percent, "93.20%");
        assert_eq!(row.detected_type, "Malveillant");
        assert_eq!(row.action, "BLOQUÉ");
    }

    #[test]
    fn test_disposition_is_blocked() {
        let alert = AlertRecord::new("PKT-1000".to_string(), "00:00:00".to_string(), 0.9);
        assert_eq!(alert.disposition.as_str(), "blocked");
    }

    #[test]
    fn test_event_jsonl_round_trip() {
        let event = MonitorEvent {
            sequence_id: "PKT-1000".to_string(),
            timestamp: "08:00:00".to_string(),
            processed_count: 1,
            normal_count: 1,
            attack_count: 0,
            anomaly_score: 0.12,
            threshold: 0.5,
            score_history: vec![0.12],
            alert: None,
        };
        let line = event.to_jsonl();
        let parsed: MonitorEvent = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, event);
    }
}
