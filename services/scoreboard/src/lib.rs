//! Scoreboard Service
//!
//! In-process registry of live football matches. Callers start matches,
//! update their scores, terminate them, and read a summary ordered by total
//! goals (most first) and then by start order (latest first).
//!
//! # Architecture
//!
//! ```text
//!  start / update / terminate          summary / snapshot
//!            │                                │
//!        ┌───▼────────────────────────────────▼───┐
//!        │  Mutex<HashMap<MatchId, Match>>        │  ← validation before mutation
//!        └───────────────────────┬────────────────┘
//!                                │ copy under lock
//!                          ┌─────▼─────┐
//!                          │  Summary  │  ← sort + render outside the lock
//!                          └───────────┘
//! ```

pub mod board;
pub mod metrics;
pub mod summary;

pub use board::{Scoreboard, ScoreboardConfig};
pub use metrics::{BoardMetrics, MetricsSnapshot};
