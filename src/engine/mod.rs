//! Game engine: session lifecycle, card selection and pair resolution.
//!
//! ## State Machine
//!
//! ```text
//! NotStarted --initialize_game()--> Active
//! Active     --last pair matched--> Complete
//! Active     --initialize_game()--> Active   (fresh session)
//! Complete   --initialize_game()--> Active   (fresh session)
//! ```
//!
//! ## Pair Resolution
//!
//! Selecting a second card counts a move at once and schedules the outcome:
//! a match locks in after the match delay, a mismatch turns back over after
//! the (longer) mismatch delay. While the pair is pending the selection is
//! full, so no further card can be turned.

mod game;
mod snapshot;
mod state;

pub use game::{MemoryGame, Rejection, SelectOutcome};
pub use snapshot::GameSnapshot;
pub use state::{Selection, SessionStatus};
