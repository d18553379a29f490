//! Event Sinks - where monitor events go
//!
//! The tick loop emits through this trait and nothing else; rendering
//! technology subscribes independently and never mutates monitor state.
//! A failing sink cannot corrupt a run.

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

use crate::monitor::MonitorEvent;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct SinkError(pub String);

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SinkError: {}", self.0)
    }
}

impl std::error::Error for SinkError {}

// ============================================================================
// SINK TRAIT
// ============================================================================

/// Consumer of monitor events, invoked synchronously at the end of each tick
pub trait EventSink {
    fn emit(&mut self, event: &MonitorEvent) -> Result<(), SinkError>;
}
