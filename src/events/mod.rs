//! Game events and observers.
//!
//! Each `play()` call reports what happened as a short list of `GameEvent`s.
//! The ones a front end usually cares about are `HandComplete`, `WarStarted`
//! and `GameWon`.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, NullObserver};
