//! Rules of War that do not depend on game state.
//!
//! - `showdown`: resolve a board into a winner, a tie, or nothing
//! - `result`: terminal match outcome

pub mod result;
pub mod showdown;

pub use result::GameResult;
pub use showdown::{resolve, Showdown};
