//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use memory_match::{CardId, GameConfig, MemoryGame};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Route engine logs to the test output. Set `RUST_LOG=memory_match=trace`
/// to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Two symbols, four cards: ids 0 and 1 are "A", ids 2 and 3 are "B".
pub fn two_symbol_config() -> GameConfig {
    GameConfig::new().with_symbols(["A", "B"])
}

/// A started two-symbol game.
pub fn started_game(seed: u64) -> MemoryGame {
    init_tracing();
    let mut game = MemoryGame::with_seed(two_symbol_config(), seed).expect("valid config");
    game.initialize_game();
    game
}

pub fn id(n: u32) -> CardId {
    CardId::new(n)
}
