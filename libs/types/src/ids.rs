//! Identifier types for scoreboard entities
//!
//! Match ids come from a single process-wide generator. They start at 1,
//! strictly increase, and are never handed out twice, even after the match
//! they named has been terminated or when several boards share the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of match ids. Initialized statically, never reset.
static MATCH_IDS: MatchIdGenerator = MatchIdGenerator::new(1);

/// Unique identifier for a match
///
/// Ordered by issue time: a larger id always belongs to a match started later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(u64);

impl MatchId {
    /// Draw the next id from the process-wide generator
    pub fn next() -> Self {
        Self(MATCH_IDS.next())
    }

    /// Wrap a raw value received from a caller (e.g. parsed from text)
    ///
    /// The value is not checked against issued ids; the board reports
    /// unknown ids when they are used.
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id generator backed by an atomic counter
///
/// Each call to `next` returns a distinct value, with no gaps, regardless of
/// how many threads draw from it concurrently.
#[derive(Debug)]
pub struct MatchIdGenerator {
    current: AtomicU64,
}

impl MatchIdGenerator {
    pub const fn new(start: u64) -> Self {
        Self {
            current: AtomicU64::new(start),
        }
    }

    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MatchIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
