//! Game engine integration tests.
//!
//! These tests drive `MemoryGame` through full sessions on the virtual
//! clock: selection guards, pair resolution, completion and restarts.

mod common;

use std::time::Duration;

use common::{id, ms, started_game, two_symbol_config};
use memory_match::{
    ConfigError, GameConfig, GameEvent, GameStats, MemoryGame, PairOutcome, Rejection,
    SelectOutcome, SessionStatus,
};

// =============================================================================
// Lifecycle
// =============================================================================

/// A game does nothing until it is dealt.
#[test]
fn test_not_started_is_inert() {
    let mut game = MemoryGame::with_seed(two_symbol_config(), 1).unwrap();

    assert_eq!(game.status(), SessionStatus::NotStarted);
    assert_eq!(game.cards().count(), 0);
    assert_eq!(game.generation(), 0);
    assert_eq!(game.select_card(id(0)), SelectOutcome::Ignored(Rejection::NotActive));
    assert!(!game.tick());

    game.advance(ms(5000));
    assert_eq!(game.elapsed_seconds(), 0);
    assert_eq!(game.next_deadline(), None);
    assert!(game.drain_events().is_empty());
}

/// Dealing resets everything and starts the clock.
#[test]
fn test_initialize_game() {
    let mut game = started_game(1);

    assert_eq!(game.status(), SessionStatus::Active);
    assert_eq!(game.cards().count(), 4);
    assert!(game.cards().all(|c| !c.is_flipped && !c.is_matched));
    assert_eq!(game.moves(), 0);
    assert_eq!(game.elapsed_seconds(), 0);
    assert_eq!(game.selection().map(|s| s.len()), Some(0));
    assert_eq!(game.next_deadline(), Some(ms(1000)));
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::GameStarted { generation: 1, card_count: 4 }]
    );
}

/// Invalid configuration is refused up front.
#[test]
fn test_invalid_config() {
    let empty = GameConfig::new().with_symbols(Vec::<&str>::new());
    assert_eq!(MemoryGame::new(empty).unwrap_err(), ConfigError::EmptyAlphabet);

    let dup = GameConfig::new().with_symbols(["X", "X"]);
    assert!(matches!(
        MemoryGame::with_seed(dup, 0),
        Err(ConfigError::DuplicateSymbol(_))
    ));
}

/// Delays too long for the clock, or a match slower than a mismatch, are
/// refused before any timer is scheduled.
#[test]
fn test_timer_config_rejected() {
    let huge = two_symbol_config().with_mismatch_delay(Duration::MAX);
    assert_eq!(
        MemoryGame::with_seed(huge, 0).unwrap_err(),
        ConfigError::TimerTooLong("mismatch_delay")
    );

    let backwards = two_symbol_config()
        .with_match_delay(ms(1500))
        .with_mismatch_delay(ms(1000));
    assert!(matches!(
        MemoryGame::with_seed(backwards, 0),
        Err(ConfigError::MatchSlowerThanMismatch { .. })
    ));
}

/// The walkthrough: mismatch, match, match, complete.
#[test]
fn test_full_two_symbol_game() {
    let mut game = started_game(7);
    game.drain_events();

    // First A then first B: mismatch
    assert_eq!(game.select_card(id(0)), SelectOutcome::Flipped);
    assert_eq!(
        game.select_card(id(2)),
        SelectOutcome::PairPending {
            first: id(0),
            second: id(2),
            outcome: PairOutcome::Mismatch,
        }
    );
    assert_eq!(game.moves(), 1);

    game.advance(ms(1000));
    assert!(!game.card(id(0)).unwrap().is_flipped);
    assert!(!game.card(id(2)).unwrap().is_flipped);
    assert!(!game.card(id(0)).unwrap().is_matched);
    assert_eq!(game.moves(), 1);

    // Both As, in reverse order: match
    game.select_card(id(1));
    let outcome = game.select_card(id(0));
    assert!(matches!(
        outcome,
        SelectOutcome::PairPending { outcome: PairOutcome::Match, .. }
    ));
    assert_eq!(game.moves(), 2);

    game.advance(ms(500));
    assert!(game.card(id(0)).unwrap().is_matched);
    assert!(game.card(id(1)).unwrap().is_matched);
    assert_eq!(game.status(), SessionStatus::Active);

    // Both Bs: match, game over
    game.select_card(id(2));
    game.select_card(id(3));
    assert_eq!(game.moves(), 3);

    game.advance(ms(500));
    assert_eq!(game.status(), SessionStatus::Complete);
    assert!(game.cards().all(|c| c.is_matched));

    let events = game.drain_events();
    let last = events.last().cloned().unwrap();
    assert_eq!(
        last,
        GameEvent::GameComplete {
            moves: 3,
            elapsed_seconds: game.elapsed_seconds(),
        }
    );
    assert_eq!(
        events.iter().filter(|e| matches!(e, GameEvent::MatchFound { .. })).count(),
        2
    );
    assert_eq!(
        events.iter().filter(|e| matches!(e, GameEvent::Mismatch { .. })).count(),
        1
    );
}

// =============================================================================
// Selection Guards
// =============================================================================

/// Selecting an open card again changes nothing.
#[test]
fn test_reselect_flipped_card_ignored() {
    let mut game = started_game(2);
    game.select_card(id(0));
    let before = game.snapshot();

    assert_eq!(game.select_card(id(0)), SelectOutcome::Ignored(Rejection::AlreadyFlipped));
    assert_eq!(game.snapshot(), before);
}

/// A third click while a pair is pending is ignored.
#[test]
fn test_third_selection_ignored() {
    let mut game = started_game(3);
    game.select_card(id(0));
    game.select_card(id(2));
    let before = game.snapshot();

    assert_eq!(game.select_card(id(1)), SelectOutcome::Ignored(Rejection::SelectionFull));
    assert_eq!(game.snapshot(), before);
    assert!(!game.card(id(1)).unwrap().is_flipped);
    assert_eq!(game.moves(), 1);
}

/// Ids outside the deck are ignored.
#[test]
fn test_unknown_card_ignored() {
    let mut game = started_game(4);
    let before = game.snapshot();

    assert_eq!(game.select_card(id(99)), SelectOutcome::Ignored(Rejection::UnknownCard));
    assert_eq!(game.snapshot(), before);
}

/// Matched cards stay matched and cannot be selected.
#[test]
fn test_matched_card_ignored() {
    let mut game = started_game(5);
    game.select_card(id(0));
    game.select_card(id(1));
    game.advance(ms(500));

    let before = game.snapshot();
    assert_eq!(game.select_card(id(1)), SelectOutcome::Ignored(Rejection::AlreadyMatched));
    assert_eq!(game.snapshot(), before);
}

/// Resolution waits for the full delay.
#[test]
fn test_resolution_waits_for_delay() {
    let mut game = started_game(6);

    game.select_card(id(0));
    game.select_card(id(3));
    game.advance(ms(999));
    assert!(game.card(id(0)).unwrap().is_flipped);
    assert_eq!(game.selection().unwrap().len(), 2);

    game.advance(ms(1));
    assert!(!game.card(id(0)).unwrap().is_flipped);
    assert!(game.selection().unwrap().is_empty());
}

/// Matches resolve faster than mismatches.
#[test]
fn test_match_resolves_before_mismatch_delay() {
    let mut game = started_game(8);

    game.select_card(id(2));
    game.select_card(id(3));
    assert_eq!(game.next_deadline(), Some(ms(500)));

    game.advance(ms(500));
    assert!(game.card(id(2)).unwrap().is_matched);
    assert!(!game.card(id(2)).unwrap().is_flipped);
}

/// The match notification fires on resolution, not on selection.
#[test]
fn test_match_event_fires_after_delay() {
    let mut game = started_game(9);
    game.drain_events();

    game.select_card(id(0));
    game.select_card(id(1));
    assert_eq!(
        game.drain_events(),
        vec![
            GameEvent::CardFlipped { card: id(0) },
            GameEvent::CardFlipped { card: id(1) },
        ]
    );

    game.advance(ms(500));
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::MatchFound {
            first: id(0),
            second: id(1),
            symbol: "A".into(),
        }]
    );
}

// =============================================================================
// Timer
// =============================================================================

/// One tick per second while active.
#[test]
fn test_timer_counts_seconds() {
    let mut game = started_game(10);

    game.advance(ms(2500));
    assert_eq!(game.elapsed_seconds(), 2);

    game.advance(ms(500));
    assert_eq!(game.elapsed_seconds(), 3);
    assert_eq!(game.now(), ms(3000));
}

/// Manual ticks count while active.
#[test]
fn test_manual_tick() {
    let mut game = started_game(11);

    assert!(game.tick());
    assert!(game.tick());
    assert_eq!(game.elapsed_seconds(), 2);
}

/// After completion the timer is stopped and selections are ignored.
#[test]
fn test_complete_freezes_session() {
    let mut game = started_game(12);
    game.advance(ms(1200));

    for (a, b) in [(0, 1), (2, 3)] {
        game.select_card(id(a));
        game.select_card(id(b));
        game.advance(ms(500));
    }
    assert_eq!(game.status(), SessionStatus::Complete);
    let elapsed = game.elapsed_seconds();
    let moves = game.moves();

    game.advance(ms(10_000));
    assert!(!game.tick());
    assert_eq!(game.elapsed_seconds(), elapsed);
    assert_eq!(game.next_deadline(), None);
    assert_eq!(game.select_card(id(0)), SelectOutcome::Ignored(Rejection::NotActive));
    assert_eq!(game.moves(), moves);
}

/// A tick armed before the last pair was revealed counts toward the final
/// time when both fall due together.
#[test]
fn test_earlier_tick_wins_tie_with_final_match() {
    let mut game = started_game(13);

    game.select_card(id(0));
    game.select_card(id(1));
    game.advance(ms(500));

    // Resolves at 1000 ms, together with the first tick
    game.select_card(id(2));
    game.select_card(id(3));
    game.advance(ms(500));

    assert_eq!(game.status(), SessionStatus::Complete);
    assert_eq!(
        game.drain_events().last(),
        Some(&GameEvent::GameComplete { moves: 2, elapsed_seconds: 1 })
    );
    assert_eq!(GameStats::from(&game).to_string(), "00:01 | 2 moves");
}

/// A tick re-armed after the last pair was revealed loses the tie: the game
/// completes before it counts.
#[test]
fn test_final_match_wins_tie_with_later_tick() {
    common::init_tracing();
    let config = two_symbol_config()
        .with_match_delay(ms(1500))
        .with_mismatch_delay(ms(2000));
    let mut game = MemoryGame::with_seed(config, 14).unwrap();
    game.initialize_game();

    game.select_card(id(0));
    game.select_card(id(1));
    game.advance(ms(1500));
    assert_eq!(game.elapsed_seconds(), 1);

    // Resolves at 3000 ms; the tick due then was armed at 2000 ms
    game.select_card(id(2));
    game.select_card(id(3));
    game.advance(ms(1500));

    assert_eq!(game.now(), ms(3000));
    assert_eq!(
        game.drain_events().last(),
        Some(&GameEvent::GameComplete { moves: 2, elapsed_seconds: 2 })
    );
}

/// One long advance gives the same session as many short ones.
#[test]
fn test_long_advance_matches_small_steps() {
    common::init_tracing();
    let config = two_symbol_config().with_tick_interval(ms(250));
    let mut long = MemoryGame::with_seed(config.clone(), 15).unwrap();
    let mut short = MemoryGame::with_seed(config, 15).unwrap();

    let phases: [(Option<(u32, u32)>, u64); 4] = [
        (Some((0, 2)), 2600),
        (Some((0, 1)), 1700),
        (None, 999),
        (Some((2, 3)), 5000),
    ];

    for game in [&mut long, &mut short] {
        game.initialize_game();
    }
    for (pair, span) in phases {
        for game in [&mut long, &mut short] {
            if let Some((a, b)) = pair {
                game.select_card(id(a));
                game.select_card(id(b));
            }
        }
        long.advance(ms(span));
        for _ in 0..span {
            short.advance(ms(1));
        }

        assert_eq!(long.now(), short.now());
        assert_eq!(long.snapshot(), short.snapshot());
        assert_eq!(long.drain_events(), short.drain_events());
    }

    assert_eq!(long.status(), SessionStatus::Complete);
}

/// The clock and the counter stop at their limits instead of overflowing,
/// and timers scheduled at the end of time still fire.
#[test]
fn test_advance_to_end_of_clock() {
    let mut game = started_game(16);

    game.advance(ms(1));
    game.advance(Duration::MAX);

    assert_eq!(game.now(), Duration::MAX);
    assert_eq!(game.elapsed_seconds(), u32::MAX);
    assert_eq!(game.status(), SessionStatus::Active);
    assert_eq!(game.next_deadline(), None);
    assert_eq!(GameStats::from(&game).elapsed_seconds, u32::MAX);

    game.drain_events();
    game.select_card(id(0));
    game.select_card(id(2));
    assert_eq!(game.next_deadline(), Some(Duration::ZERO));

    game.advance(Duration::ZERO);
    assert!(!game.card(id(0)).unwrap().is_flipped);
    assert!(!game.card(id(2)).unwrap().is_flipped);
    assert_eq!(
        game.drain_events().last(),
        Some(&GameEvent::Mismatch { first: id(0), second: id(2) })
    );
}

// =============================================================================
// Restarts
// =============================================================================

/// A new game after completion starts clean.
#[test]
fn test_restart_after_complete() {
    let mut game = started_game(13);
    for (a, b) in [(0, 1), (2, 3)] {
        game.select_card(id(a));
        game.select_card(id(b));
        game.advance(ms(500));
    }
    assert_eq!(game.status(), SessionStatus::Complete);

    game.initialize_game();
    assert_eq!(game.status(), SessionStatus::Active);
    assert_eq!(game.generation(), 2);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.elapsed_seconds(), 0);
    assert!(game.cards().all(|c| !c.is_flipped && !c.is_matched));

    game.advance(ms(1000));
    assert_eq!(game.elapsed_seconds(), 1);
}

/// A resolution scheduled by an old session never touches the new one.
#[test]
fn test_stale_resolution_dropped_after_restart() {
    let mut game = started_game(14);

    // Old session: match pending, due at 500ms
    game.select_card(id(0));
    game.select_card(id(1));
    game.advance(ms(100));

    // New session at 100ms: the same ids form a new pending match, due at 600ms
    game.initialize_game();
    game.select_card(id(0));
    game.select_card(id(1));

    game.advance(ms(450));
    assert!(!game.card(id(0)).unwrap().is_matched);
    assert!(game.card(id(0)).unwrap().is_flipped);

    game.advance(ms(50));
    assert!(game.card(id(0)).unwrap().is_matched);
    assert!(game.card(id(1)).unwrap().is_matched);
}

/// Restarting mid-game resets the clock and counters.
#[test]
fn test_restart_mid_game_resets_timer() {
    let mut game = started_game(15);
    game.select_card(id(0));
    game.select_card(id(2));
    game.advance(ms(1500));
    assert_eq!(game.elapsed_seconds(), 1);

    game.initialize_game();
    assert_eq!(game.elapsed_seconds(), 0);
    assert_eq!(game.moves(), 0);

    // Next tick is a full interval after the restart, not at 2000ms
    game.advance(ms(500));
    assert_eq!(game.elapsed_seconds(), 0);
    game.advance(ms(500));
    assert_eq!(game.elapsed_seconds(), 1);
}

// =============================================================================
// Snapshots and Layout
// =============================================================================

/// Snapshots are detached copies.
#[test]
fn test_snapshot_is_read_only_projection() {
    let mut game = started_game(16);
    let snapshot = game.snapshot();

    game.select_card(id(0));

    assert!(!snapshot.card(id(0)).unwrap().is_flipped);
    assert!(game.snapshot().card(id(0)).unwrap().is_flipped);
    assert_eq!(snapshot.status, SessionStatus::Active);
    assert_eq!(snapshot.generation, 1);
}

/// Snapshots serialize for views.
#[test]
fn test_snapshot_json() {
    let mut game = started_game(17);
    game.select_card(id(0));

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["status"], "Active");
    assert_eq!(json["moves"], 0);
    assert_eq!(json["cards"].as_array().unwrap().len(), 4);
    assert_eq!(json["selection"], serde_json::json!([0]));
}

/// Same seed, same layouts; successive games reshuffle.
#[test]
fn test_seeded_layouts() {
    let layout = |game: &MemoryGame| game.cards().map(|c| c.id).collect::<Vec<_>>();

    let mut a = MemoryGame::with_seed(GameConfig::default(), 2024).unwrap();
    let mut b = MemoryGame::with_seed(GameConfig::default(), 2024).unwrap();
    a.initialize_game();
    b.initialize_game();
    assert_eq!(layout(&a), layout(&b));

    let first = layout(&a);
    a.initialize_game();
    assert_ne!(layout(&a), first);
    assert_eq!(a.seed(), 2024);
}

/// An entropy-seeded game can be replayed from its recorded seed.
#[test]
fn test_replay_from_seed() {
    let mut original = MemoryGame::new(GameConfig::default()).unwrap();
    let mut replay = MemoryGame::with_seed(GameConfig::default(), original.seed()).unwrap();

    for _ in 0..3 {
        original.initialize_game();
        replay.initialize_game();
        assert!(original.cards().eq(replay.cards()));
    }
}
