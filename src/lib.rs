//! # memory-match
//!
//! Engine for the memory-matching card game: a board of face-down pairs is
//! revealed two cards at a time, matching pairs stay revealed, and the game
//! ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session**: All mutable state lives in one `MemoryGame`
//!    owned by the host. A new game replaces the session wholesale.
//!
//! 2. **Virtual Time**: Timers run on a clock the host advances, so play is
//!    deterministic and testable without sleeping.
//!
//! 3. **Generation-Tagged Timers**: Delayed work remembers which session
//!    scheduled it and is dropped if a newer session has started.
//!
//! 4. **Guards, Not Errors**: Invalid selections are no-ops reported as
//!    `SelectOutcome::Ignored`; only configuration can fail.
//!
//! ## Modules
//!
//! - `core`: Card ids, symbols, RNG, configuration
//! - `cards`: Cards and the shuffled deck
//! - `engine`: `MemoryGame`, session state machine, snapshots
//! - `schedule`: Virtual-time scheduler and game tasks
//! - `events`: Notifications (match found, game complete, ...)
//! - `stats`: Moves/time formatting
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{GameConfig, GameEvent, MemoryGame, SelectOutcome};
//!
//! let config = GameConfig::new().with_symbols(["A"]);
//! let mut game = MemoryGame::with_seed(config, 1).unwrap();
//! game.initialize_game();
//!
//! let ids: Vec<_> = game.cards().map(|c| c.id).collect();
//! assert_eq!(game.select_card(ids[0]), SelectOutcome::Flipped);
//! assert!(game.select_card(ids[1]).is_accepted());
//!
//! game.advance(Duration::from_millis(500));
//! assert!(game
//!     .drain_events()
//!     .iter()
//!     .any(|e| matches!(e, GameEvent::GameComplete { moves: 1, .. })));
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod events;
pub mod schedule;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigError, GameConfig, GameRng, Symbol};

pub use crate::cards::{Card, Deck};

pub use crate::engine::{GameSnapshot, MemoryGame, Rejection, SelectOutcome, Selection, SessionStatus};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::schedule::{GameTask, PairOutcome, Scheduler, TaskId};

pub use crate::stats::{format_clock, GameStats};
