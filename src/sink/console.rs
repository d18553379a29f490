//! Console Sink - terminal SOC dashboard
//!
//! Renders the same surfaces the operator dashboard shows: the KPI triple
//! (analyzed / legitimate / intrusions), a score bar against the threshold
//! line, and the head of the alert journal.

use std::io::Write;

use super::{EventSink, SinkError};
use crate::constants::ALERT_DISPLAY_ROWS;
use crate::monitor::MonitorEvent;

/// Width of the score bar in characters
const BAR_WIDTH: usize = 40;

/// Line-per-tick terminal renderer
pub struct ConsoleSink<W: Write> {
    out: W,
    /// Alert rows seen this run, newest first
    alert_lines: Vec<String>,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            alert_lines: Vec::new(),
        }
    }

    fn score_bar(score: f32, threshold: f32) -> String {
        let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f32) as usize).min(BAR_WIDTH);
        let marker = ((threshold.clamp(0.0, 1.0) * BAR_WIDTH as f32) as usize).min(BAR_WIDTH - 1);

        let mut bar = String::with_capacity(BAR_WIDTH);
        for i in 0..BAR_WIDTH {
            if i == marker {
                bar.push('|');
            } else if i < filled {
                bar.push('#');
            } else {
                bar.push('.');
            }
        }
        bar
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &MonitorEvent) -> Result<(), SinkError> {
        let flag = if event.alert.is_some() { "ALERT" } else { "  ok " };

        writeln!(
            self.out,
            "[{}] {} {} score={:.3} [{}] analyzed={} legit={} intrusions={}",
            event.timestamp,
            event.sequence_id,
            flag,
            event.anomaly_score,
            Self::score_bar(event.anomaly_score, event.threshold),
            event.processed_count,
            event.normal_count,
            event.attack_count,
        )
        .map_err(|e| SinkError(format!("stdout write failed: {}", e)))?;

        if let Some(alert) = &event.alert {
            let row = alert.to_row();
            self.alert_lines.insert(
                0,
                format!(
                    "  {}  {}  {}  {}  {}",
                    row.time, row.packet_id, row.anomaly_score_percent, row.detected_type, row.action
                ),
            );

            writeln!(self.out, "  -- alert journal (latest {}) --", ALERT_DISPLAY_ROWS)
                .map_err(|e| SinkError(format!("stdout write failed: {}", e)))?;
            for line in self.alert_lines.iter().take(ALERT_DISPLAY_ROWS) {
                writeln!(self.out, "{}", line)
                    .map_err(|e| SinkError(format!("stdout write failed: {}", e)))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::AlertRecord;

    fn event(score: f32, alert: bool) -> MonitorEvent {
        MonitorEvent {
            sequence_id: "PKT-1000".to_string(),
            timestamp: "14:00:00".to_string(),
            processed_count: 1,
            normal_count: if alert { 0 } else { 1 },
            attack_count: if alert { 1 } else { 0 },
            anomaly_score: score,
            threshold: 0.5,
            score_history: vec![score],
            alert: alert.then(|| {
                AlertRecord::new("PKT-1000".to_string(), "14:00:00".to_string(), score)
            }),
        }
    }

    #[test]
    fn test_renders_kpi_line() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&event(0.2, false)).unwrap();

        let output = String::from_utf8(sink.out).unwrap();
        assert!(output.contains("PKT-1000"));
        assert!(output.contains("analyzed=1"));
        assert!(output.contains("legit=1"));
        assert!(output.contains("intrusions=0"));
        assert!(!output.contains("Malveillant"));
    }

    #[test]
    fn test_renders_alert_journal_row() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&event(0.93, true)).unwrap();

        let output = String::from_utf8(sink.out).unwrap();
        assert!(output.contains("ALERT"));
        assert!(output.contains("93.00%"));
        assert!(output.contains("Malveillant"));
        assert!(output.contains("BLOQUÉ"));
    }

    #[test]
    fn test_score_bar_marks_threshold() {
        let bar = ConsoleSink::<Vec<u8>>::score_bar(0.0, 0.5);
        assert_eq!(bar.len(), BAR_WIDTH);
        assert_eq!(bar.chars().filter(|&c| c == '|').count(), 1);
    }
}
