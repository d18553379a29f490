//! Streaming Monitor - loop, state, events, alert policy
//!
//! ## Structure
//! - `config.rs` - run parameters with reference defaults
//! - `history.rs` - bounded FIFO over anomaly scores
//! - `state.rs` - counters + history + session alert journal
//! - `event.rs` - immutable per-tick events and alert records
//! - `error.rs` - everything that can stop a run
//! - `runner.rs` - the tick loop itself

pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod runner;
pub mod state;

// Re-export main types
pub use config::MonitorConfig;
pub use error::MonitorError;
pub use event::{AlertRecord, AlertRow, Disposition, MonitorEvent};
pub use history::ScoreHistory;
pub use runner::{CancelToken, Monitor, RunState, RunSummary};
pub use state::MonitorState;
