//! Perfect-play tic-tac-toe engine.
//!
//! This library is the core of a human-vs-computer tic-tac-toe game. The
//! computer opponent searches the full game tree with minimax, so it plays
//! perfectly: it never loses, and it converts every forceable win.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns the board, turn, and status, and is
//!   driven by a front end through `configure` / `apply_move` / `reset`.
//! - **Rules**: [`rules`] holds the win and draw predicates shared by the
//!   session and the search, so both always agree on terminal states.
//! - **Engine**: [`minimax::best_move`] picks the computer's move by
//!   exhaustive adversarial search.
//! - **Invariants**: [`invariants`] are first-class, composable properties
//!   checked after every mutation in debug builds.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{GameSession, Player, Position};
//!
//! let mut session = GameSession::configure(Player::X, true);
//! session.apply_move(Position::Center)?;
//! // The computer has already replied; the turn is back with the human.
//! assert_eq!(session.to_move(), Player::X);
//! # Ok::<(), perfect_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod session;
mod types;

// Public modules
pub mod invariants;
pub mod minimax;
pub mod rules;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - session
pub use session::{GameSession, MatchConfig};

// Crate-level exports - engine
pub use minimax::{Evaluation, best_move};
