//! Core engine types: card identities, symbols, RNG, configuration.
//!
//! These are the building blocks every other module shares. Nothing here
//! knows about selections, timers or sessions.

pub mod config;
pub mod ids;
pub mod rng;

pub use config::{
    ConfigError, GameConfig, DEFAULT_MATCH_DELAY, DEFAULT_MISMATCH_DELAY, DEFAULT_SYMBOLS,
    DEFAULT_TICK_INTERVAL, MAX_SYMBOLS, MAX_TIMER,
};
pub use ids::{CardId, Symbol};
pub use rng::GameRng;
