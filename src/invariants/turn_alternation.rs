//! Turn alternation invariant: players alternate strictly.

use super::Invariant;
use crate::session::GameSession;
use crate::types::GameStatus;

/// Invariant: the move history alternates between the two players, and
/// while the game is in progress the turn holder is the opponent of the
/// last mover.
///
/// The history's first mover is not compared against the configuration:
/// after a reset the human moves first regardless of who opened the prior
/// game, so the history itself is the anchor.
pub struct TurnAlternationInvariant;

impl Invariant<GameSession> for TurnAlternationInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if session.status() == GameStatus::InProgress
            && let Some(last) = history.last()
            && session.to_move() != last.player.opponent()
        {
            return false;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns, and the turn holder follows the last mover"
    }
}
