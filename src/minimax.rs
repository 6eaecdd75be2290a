//! Exhaustive minimax search for the computer opponent.
//!
//! The 3x3 game tree is small (at most 9 plies, fewer than 9! leaves), so
//! the engine enumerates it fully on every invocation. No memoization, no
//! depth limit; the result is exact, and the computer never loses.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Outcome of evaluating a (sub)tree.
///
/// Scores are always from the computer's perspective: `+1` the computer
/// wins, `0` draw, `-1` the human wins. `position` is `None` at terminal
/// leaves, where no move remains to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The move that achieves `score`, if the board is not terminal.
    pub position: Option<Position>,
    /// Score from the computer's perspective.
    pub score: i32,
}

/// Returns the optimal move for `to_move` on `board`.
///
/// `computer` identifies whose outcomes are maximized; when `to_move` is
/// the other player the search models the opponent's best (minimizing)
/// response. Ties break toward the lowest board index, and the caller's
/// board is never modified.
#[instrument(skip(board))]
pub fn best_move(board: &Board, to_move: Player, computer: Player) -> Evaluation {
    let mut scratch = board.clone();
    let evaluation = search(&mut scratch, to_move, computer);
    debug!(?evaluation, "Search complete");
    evaluation
}

/// Recursive minimax over a shared scratch board.
///
/// Each candidate placement is reverted immediately after the recursive
/// call returns, so the board is unchanged on every exit path.
fn search(board: &mut Board, to_move: Player, computer: Player) -> Evaluation {
    // Terminal leaves score without branching.
    if let Some(winner) = rules::check_winner(board) {
        let score = if winner == computer { 1 } else { -1 };
        return Evaluation {
            position: None,
            score,
        };
    }
    if rules::is_full(board) {
        return Evaluation {
            position: None,
            score: 0,
        };
    }

    let mut best: Option<Evaluation> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(to_move));
        let reply = search(board, to_move.opponent(), computer);
        board.set(pos, Square::Empty);

        let candidate = Evaluation {
            position: Some(pos),
            score: reply.score,
        };

        // Stable first-max for the computer, first-min for the opponent:
        // a later candidate replaces the best only on a strict improvement.
        best = match best {
            None => Some(candidate),
            Some(current) => {
                let improves = if to_move == computer {
                    candidate.score > current.score
                } else {
                    candidate.score < current.score
                };
                if improves { Some(candidate) } else { Some(current) }
            }
        };
    }

    // A non-terminal board has at least one empty square.
    best.expect("non-terminal board must yield a candidate move")
}
