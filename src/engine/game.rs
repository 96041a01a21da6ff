//! The game engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::snapshot::GameSnapshot;
use super::state::{Selection, Session, SessionStatus};
use crate::cards::{Card, Deck};
use crate::core::{CardId, ConfigError, GameConfig, GameRng};
use crate::events::{EventQueue, GameEvent};
use crate::schedule::{GameTask, PairOutcome, Scheduler};

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// No game in progress (not started, or already complete).
    NotActive,
    /// The id is not on the board.
    UnknownCard,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// Two cards are already waiting to resolve.
    SelectionFull,
}

/// What a call to [`MemoryGame::select_card`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// The card is face-up and waits for a partner.
    Flipped,
    /// The card completed a pair; its resolution is scheduled.
    PairPending {
        first: CardId,
        second: CardId,
        outcome: PairOutcome,
    },
}

impl SelectOutcome {
    /// Did the selection change any state?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}

/// A memory-matching game.
///
/// Owns the current session, the virtual clock that drives its timers, and
/// the queue of notifications. All mutation goes through `&mut self`, so a
/// single owner serialises every command and timer callback.
///
/// ## Driving the clock
///
/// The engine never reads wall time. Hosts call [`advance`](Self::advance)
/// with the real time that passed (or [`next_deadline`](Self::next_deadline)
/// to know how long to sleep). Tests advance it by exact amounts.
///
/// ```
/// use std::time::Duration;
/// use memory_match::{GameConfig, MemoryGame, SessionStatus};
///
/// let mut game = MemoryGame::with_seed(GameConfig::default(), 42).unwrap();
/// assert_eq!(game.status(), SessionStatus::NotStarted);
///
/// game.initialize_game();
/// assert_eq!(game.status(), SessionStatus::Active);
/// assert_eq!(game.cards().count(), 16);
///
/// game.advance(Duration::from_secs(3));
/// assert_eq!(game.elapsed_seconds(), 3);
/// ```
#[derive(Debug)]
pub struct MemoryGame {
    config: GameConfig,
    rng: GameRng,
    session: Option<Session>,
    scheduler: Scheduler<GameTask>,
    events: EventQueue,
    generation: u64,
}

impl MemoryGame {
    /// Create a game seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::from_rng(config, GameRng::from_entropy())
    }

    /// Create a game whose deck layouts are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, GameRng::new(seed))
    }

    fn from_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            rng,
            session: None,
            scheduler: Scheduler::new(),
            events: EventQueue::new(),
            generation: 0,
        })
    }

    // === Commands ===

    /// Deal a fresh, shuffled deck and start a new session.
    ///
    /// Any timer or pending resolution of the previous session is dropped.
    pub fn initialize_game(&mut self) {
        self.generation += 1;
        self.scheduler.clear();

        let mut shuffle_rng = self.rng.fork();
        let deck = Deck::shuffled(&self.config.symbols, &mut shuffle_rng);
        let card_count = deck.len();

        self.session = Some(Session::new(self.generation, deck));
        self.scheduler.schedule_after(
            self.config.tick_interval,
            GameTask::Tick { generation: self.generation },
        );

        info!(generation = self.generation, card_count, "new game dealt");
        self.events.push(GameEvent::GameStarted {
            generation: self.generation,
            card_count,
        });
    }

    /// Turn a card face-up.
    ///
    /// Invalid selections are ignored and reported through the returned
    /// [`SelectOutcome`]; they never change state.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let Some(session) = self.session.as_mut().filter(|s| s.status.is_active()) else {
            return Self::ignore(id, Rejection::NotActive);
        };

        let rejection = match session.deck.get(id) {
            None => Some(Rejection::UnknownCard),
            Some(card) if card.is_matched => Some(Rejection::AlreadyMatched),
            Some(card) if card.is_flipped => Some(Rejection::AlreadyFlipped),
            Some(_) if session.selection.is_full() => Some(Rejection::SelectionFull),
            Some(_) => None,
        };
        if let Some(rejection) = rejection {
            return Self::ignore(id, rejection);
        }

        if let Some(card) = session.deck.get_mut(id) {
            card.flip_up();
        }
        session.selection.push(id);
        debug!(card = %id, pending = session.selection.len(), "card flipped");
        self.events.push(GameEvent::CardFlipped { card: id });

        let Some((first, second)) = session.selection.pair() else {
            return SelectOutcome::Flipped;
        };

        session.moves = session.moves.saturating_add(1);

        let same_symbol = match (session.deck.get(first), session.deck.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };
        let outcome = PairOutcome::from_equal(same_symbol);
        let delay = match outcome {
            PairOutcome::Match => self.config.match_delay,
            PairOutcome::Mismatch => self.config.mismatch_delay,
        };

        debug!(%first, %second, ?outcome, moves = session.moves, "pair revealed");
        self.scheduler.schedule_after(
            delay,
            GameTask::ResolvePair {
                generation: session.generation,
                first,
                second,
                outcome,
            },
        );

        SelectOutcome::PairPending { first, second, outcome }
    }

    /// Count one elapsed second.
    ///
    /// Returns false (and does nothing) unless a session is active. The
    /// internal timer calls this on every tick interval; hosts that run
    /// their own timer may call it directly instead of relying on
    /// [`advance`](Self::advance), but should not do both.
    pub fn tick(&mut self) -> bool {
        self.count_seconds(1)
    }

    /// Let `elapsed` time pass, running every timer that falls due.
    ///
    /// The clock stops at `Duration::MAX` and the elapsed counter at
    /// `u32::MAX`. Runs of ticks with no other timer between them are
    /// counted in one step, so long jumps cost the same as short ones.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task, until);
        }
        self.scheduler.advance_to(until);
    }

    /// Time until the next timer fires, if any is scheduled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = self.scheduler.now();
        self.scheduler
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Take every notification fired since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.as_ref().map_or(SessionStatus::NotStarted, |s| s.status)
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.moves)
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.elapsed_seconds)
    }

    /// Cards in board order. Empty before the first game.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.session.iter().flat_map(|s| s.deck.iter())
    }

    /// Look up one card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.session.as_ref().and_then(|s| s.deck.get(id))
    }

    /// Cards face-up and awaiting resolution.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.session.as_ref().map(|s| &s.selection)
    }

    /// Generation of the current session; 0 before the first game.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the game's RNG, for replaying the same sequence of layouts.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Read-only copy of everything a view needs.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        match &self.session {
            Some(session) => GameSnapshot {
                cards: session.deck.cards(),
                selection: session.selection.clone(),
                moves: session.moves,
                elapsed_seconds: session.elapsed_seconds,
                status: session.status,
                generation: session.generation,
            },
            None => GameSnapshot::default(),
        }
    }

    // === Timer Callbacks ===

    fn run_task(&mut self, task: GameTask, until: Duration) {
        if task.generation() != self.generation {
            trace!(task_generation = task.generation(), current = self.generation, "stale task dropped");
            return;
        }

        match task {
            GameTask::Tick { generation } => {
                let due = self.scheduler.now();
                let count = self.due_ticks(due, until);
                if !self.count_seconds(count) {
                    return;
                }
                // Past the end of the clock the ticker just stops.
                if let Some(deadline) = offset(due, self.config.tick_interval, count) {
                    self.scheduler.schedule_at(deadline, GameTask::Tick { generation });
                }
            }
            GameTask::ResolvePair { first, second, outcome, .. } => {
                self.resolve_pair(first, second, outcome);
            }
        }
    }

    /// Number of ticks due from `due` through `until`, stopping before any
    /// other timer so that it still runs between the same two ticks.
    fn due_ticks(&self, due: Duration, until: Duration) -> u128 {
        let step = self.config.tick_interval.as_nanos();
        let through_until = until.saturating_sub(due).as_nanos() / step + 1;
        let before_next = match self.scheduler.next_deadline() {
            Some(next) if next > due => (next - due).as_nanos().div_ceil(step),
            Some(_) => 0,
            None => u128::MAX,
        };
        through_until.min(before_next).max(1)
    }

    fn count_seconds(&mut self, count: u128) -> bool {
        match self.session.as_mut() {
            Some(session) if session.status.is_active() => {
                let seconds = u32::try_from(count).unwrap_or(u32::MAX);
                session.elapsed_seconds = session.elapsed_seconds.saturating_add(seconds);
                trace!(elapsed = session.elapsed_seconds, seconds, "tick");
                true
            }
            _ => false,
        }
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId, outcome: PairOutcome) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.selection.pair() != Some((first, second)) {
            trace!(%first, %second, "resolution no longer pending");
            return;
        }

        match outcome {
            PairOutcome::Match => {
                for id in [first, second] {
                    if let Some(card) = session.deck.get_mut(id) {
                        card.mark_matched();
                    }
                }
                session.selection.clear();

                debug!(%first, %second, remaining = session.deck.pairs_remaining(), "match found");
                if let Some(symbol) = session.deck.get(first).map(|c| c.symbol.clone()) {
                    self.events.push(GameEvent::MatchFound { first, second, symbol });
                }

                self.check_completion();
            }
            PairOutcome::Mismatch => {
                for id in [first, second] {
                    if let Some(card) = session.deck.get_mut(id) {
                        card.flip_down();
                    }
                }
                session.selection.clear();

                debug!(%first, %second, "mismatch, cards turned back");
                self.events.push(GameEvent::Mismatch { first, second });
            }
        }
    }

    fn check_completion(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.status.is_active() || !session.deck.all_matched() {
            return;
        }

        session.status = SessionStatus::Complete;
        // Stops the ticker; nothing else of this session can be pending.
        self.scheduler.clear();

        info!(
            generation = session.generation,
            moves = session.moves,
            elapsed_seconds = session.elapsed_seconds,
            "game complete"
        );
        self.events.push(GameEvent::GameComplete {
            moves: session.moves,
            elapsed_seconds: session.elapsed_seconds,
        });
    }

    fn ignore(id: CardId, rejection: Rejection) -> SelectOutcome {
        trace!(card = %id, ?rejection, "selection ignored");
        SelectOutcome::Ignored(rejection)
    }
}

/// `base + step * count`, or `None` past `Duration::MAX`.
fn offset(base: Duration, step: Duration, count: u128) -> Option<Duration> {
    let nanos = step
        .as_nanos()
        .checked_mul(count)?
        .checked_add(base.as_nanos())?;
    let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
    let subsec = u32::try_from(nanos % 1_000_000_000).ok()?;
    Some(Duration::new(secs, subsec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let step = Duration::from_millis(1500);
        assert_eq!(offset(Duration::from_secs(1), step, 0), Some(Duration::from_secs(1)));
        assert_eq!(offset(Duration::from_secs(1), step, 3), Some(Duration::from_millis(5500)));
        assert_eq!(offset(Duration::MAX, Duration::from_nanos(1), 1), None);
        assert_eq!(offset(Duration::ZERO, step, u128::MAX), None);
    }
}
