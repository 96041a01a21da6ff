//! Timed work: the elapsed-time ticker and delayed pair resolution.
//!
//! ## Design Philosophy
//!
//! The game has no threads. Delayed work is queued on a [`Scheduler`]
//! running on a virtual clock that the host advances. Every task carries the
//! generation of the session that created it, so work scheduled by an old
//! session can be recognised and dropped after a restart.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::{GameTask, Scheduler};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule_after(Duration::from_secs(1), GameTask::Tick { generation: 1 });
//!
//! assert_eq!(scheduler.pop_due(Duration::from_millis(999)), None);
//! assert_eq!(
//!     scheduler.pop_due(Duration::from_secs(1)),
//!     Some(GameTask::Tick { generation: 1 })
//! );
//! ```

mod scheduler;

pub use scheduler::{Scheduler, TaskId};

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Result of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Same symbol: both cards lock in.
    Match,
    /// Different symbols: both cards turn back over.
    Mismatch,
}

impl PairOutcome {
    /// Outcome for a comparison result.
    #[must_use]
    pub fn from_equal(equal: bool) -> Self {
        if equal {
            PairOutcome::Match
        } else {
            PairOutcome::Mismatch
        }
    }

    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, PairOutcome::Match)
    }
}

/// Work the game schedules for later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameTask {
    /// Advance the elapsed-seconds counter and re-arm.
    Tick { generation: u64 },

    /// Apply the outcome of a pending pair comparison.
    ResolvePair {
        generation: u64,
        first: CardId,
        second: CardId,
        outcome: PairOutcome,
    },
}

impl GameTask {
    /// Session generation the task belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            GameTask::Tick { generation } | GameTask::ResolvePair { generation, .. } => *generation,
        }
    }
}
