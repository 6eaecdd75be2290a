//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating terminal conditions. They are the single
//! source of truth shared by the session's status update and the minimax
//! engine's leaf evaluation; the two must never diverge.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
