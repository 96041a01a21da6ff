//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing a `GameConfig`:
//! - the symbol alphabet (each symbol becomes one pair)
//! - the resolution delays for matches and mismatches
//! - the interval of the elapsed-time counter
//!
//! The defaults reproduce the classic 4x4 board: eight symbols, matches
//! resolve after 500 ms, mismatches after 1 s.
//!
//! A match never resolves slower than a mismatch, and every timer is at
//! most [`MAX_TIMER`] long.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::Symbol;

/// The default alphabet: eight glyphs, sixteen cards.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🎮", "🎯", "🎪", "🎨", "🎭", "🎲", "🎸", "🎺"];

/// Delay before a matched pair is locked in.
pub const DEFAULT_MATCH_DELAY: Duration = Duration::from_millis(500);

/// Delay before a mismatched pair is turned face-down again.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Period of the elapsed-time counter.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound for the delays and the tick interval.
pub const MAX_TIMER: Duration = Duration::from_secs(24 * 60 * 60);

/// Largest alphabet a deck can be built from.
pub const MAX_SYMBOLS: usize = 1024;

/// Reasons a configuration cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No symbols means no cards.
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,

    /// More symbols than a deck can hold.
    #[error("symbol alphabet has {0} entries, at most {MAX_SYMBOLS} allowed")]
    TooManySymbols(usize),

    /// Each symbol must appear exactly twice in the deck.
    #[error("symbol `{0}` appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),

    /// The timer would never advance.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    /// A delay or the tick interval is longer than [`MAX_TIMER`].
    #[error("{0} exceeds the 24h timer limit")]
    TimerTooLong(&'static str),

    /// Matches must resolve no later than mismatches.
    #[error("match delay {match_delay:?} is longer than mismatch delay {mismatch_delay:?}")]
    MatchSlowerThanMismatch {
        match_delay: Duration,
        mismatch_delay: Duration,
    },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbol alphabet. The deck holds two cards per symbol.
    pub symbols: Vec<Symbol>,

    /// Display delay before a matching pair resolves.
    pub match_delay: Duration,

    /// Display delay before a mismatching pair flips back.
    pub mismatch_delay: Duration,

    /// Real time represented by one elapsed-seconds tick.
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().copied().map(Symbol::from).collect(),
            match_delay: DEFAULT_MATCH_DELAY,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol alphabet.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the match resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    /// Set the mismatch resolution delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Number of cards a deck built from this config holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Check that a game can be started with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.symbols.len() > MAX_SYMBOLS {
            return Err(ConfigError::TooManySymbols(self.symbols.len()));
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        let timers = [
            ("match_delay", self.match_delay),
            ("mismatch_delay", self.mismatch_delay),
            ("tick_interval", self.tick_interval),
        ];
        if let Some((name, _)) = timers.iter().find(|(_, timer)| *timer > MAX_TIMER) {
            return Err(ConfigError::TimerTooLong(*name));
        }

        if self.match_delay > self.mismatch_delay {
            return Err(ConfigError::MatchSlowerThanMismatch {
                match_delay: self.match_delay,
                mismatch_delay: self.mismatch_delay,
            });
        }

        Ok(())
    }
}
