//! Static evaluation used when search stops before a terminal state

use crate::tictactoe::{BoardState, Line, LineAnalyzer, Player};

/// Score `board` from `player`'s point of view.
///
/// Every line the opponent has not entered adds `player`'s mark count; every
/// line `player` has not entered subtracts the opponent's count. Lines held
/// by both contribute nothing.
pub fn evaluate(board: &BoardState, player: Player) -> i32 {
    let opponent = player.opponent();
    let size = board.size();

    Line::all(size)
        .map(|line| {
            let counts = LineAnalyzer::counts(board.cells(), size, line);
            let mine = counts.of(player) as i32;
            let theirs = counts.of(opponent) as i32;
            let mut score = 0;
            if theirs == 0 {
                score += mine;
            }
            if mine == 0 {
                score -= theirs;
            }
            score
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize, marks: &[(usize, Player)]) -> BoardState {
        BoardState::with_marks(size, marks).unwrap()
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate(&BoardState::new(4).unwrap(), Player::X), 0);
    }

    #[test]
    fn test_single_centre_mark() {
        // Centre of 3×3 sits on four lines
        let b = board(3, &[(4, Player::X)]);
        assert_eq!(evaluate(&b, Player::X), 4);
        assert_eq!(evaluate(&b, Player::O), -4);
    }

    #[test]
    fn test_prefers_uncontested_lines_for_self() {
        let a = board(3, &[(0, Player::X), (1, Player::X), (4, Player::O)]);
        let b = board(3, &[(0, Player::O), (1, Player::O), (4, Player::X)]);
        assert!(evaluate(&a, Player::X) > evaluate(&b, Player::X));
    }

    #[test]
    fn test_blocking_does_not_lower_score() {
        let open = board(3, &[(1, Player::O), (2, Player::O), (4, Player::X)]);
        let blocked = board(
            3,
            &[(0, Player::X), (1, Player::O), (2, Player::O), (4, Player::X)],
        );
        assert!(evaluate(&blocked, Player::X) >= evaluate(&open, Player::X));
    }

    #[test]
    fn test_contested_line_is_neutral() {
        // Row 0 holds one of each; column and diagonal terms cancel by symmetry
        let b = board(3, &[(0, Player::X), (2, Player::O)]);
        assert_eq!(evaluate(&b, Player::X), 0);
    }
}
