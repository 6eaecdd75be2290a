//! Status consistency invariant: the stored status agrees with the rules.

use super::Invariant;
use crate::rules;
use crate::session::GameSession;
use crate::types::GameStatus;

/// Invariant: the session status matches what the rules report for the
/// board - `Won` exactly when a winner exists, `Draw` exactly when the
/// board is full without one, `InProgress` otherwise. Win and draw can
/// never both hold.
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        match session.status() {
            GameStatus::Won(winner) => rules::check_winner(board) == Some(winner),
            GameStatus::Draw => rules::is_draw(board),
            GameStatus::InProgress => {
                rules::check_winner(board).is_none() && !rules::is_full(board)
            }
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the win/draw rules for the board"
    }
}
