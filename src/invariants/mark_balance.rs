//! Mark balance invariant: X and O counts never drift apart.

use super::Invariant;
use crate::session::GameSession;
use crate::types::{Player, Square};

/// Invariant: the board holds as many X's as O's, or one more of the mark
/// that moved first - the counts differ by at most one.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let x_count = session
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::X)))
            .count();
        let o_count = session
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::O)))
            .count();

        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_for_fresh_session() {
        let session = GameSession::configure(Player::X, true);
        assert!(MarkBalanceInvariant::holds(&session));
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let mut session = GameSession::configure(Player::X, true);
        for pos in Position::ALL {
            // Moves on occupied squares are rejected without mutating, so
            // blindly trying every square walks the game forward.
            let _ = session.apply_move(pos);
            assert!(MarkBalanceInvariant::holds(&session));
        }
    }
}
