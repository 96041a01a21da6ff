//! Notifications fired by the engine.
//!
//! The engine pushes events into an [`EventQueue`]; hosts collect them with
//! `MemoryGame::drain_events` after each command or clock advance.

mod event;
mod queue;

pub use event::GameEvent;
pub use queue::EventQueue;
