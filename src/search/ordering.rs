//! Centre-first move ordering and opening squares

use crate::tictactoe::BoardState;

/// Manhattan distance from `index` to the geometric centre, doubled.
///
/// The centre sits at `(n-1)/2` on both axes, which is fractional on even
/// boards; doubling keeps the key integral without changing the order.
pub fn centre_distance(size: usize, index: usize) -> usize {
    let (r, c) = (index / size, index % size);
    let centre = size - 1;
    (2 * r).abs_diff(centre) + (2 * c).abs_diff(centre)
}

/// Available moves, nearest to the centre first.
///
/// The sort is stable over ascending indices, so ties keep index order.
pub fn ordered_moves(board: &BoardState) -> Vec<usize> {
    let size = board.size();
    let mut moves = board.available_moves();
    moves.sort_by_key(|&index| centre_distance(size, index));
    moves
}

/// Cells an opening move may take: the centre on odd boards, the four
/// middle cells on even ones
pub fn opening_candidates(size: usize) -> Vec<usize> {
    if !size.is_multiple_of(2) {
        return vec![(size * size) / 2];
    }
    let (a, b) = (size / 2 - 1, size / 2);
    vec![a * size + a, a * size + b, b * size + a, b * size + b]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_centre_first_on_3x3() {
        let board = BoardState::new(3).unwrap();
        assert_eq!(ordered_moves(&board), vec![4, 1, 3, 5, 7, 0, 2, 6, 8]);
    }

    #[test]
    fn test_even_board_middle_block_first() {
        let board = BoardState::new(4).unwrap();
        let moves = ordered_moves(&board);
        assert_eq!(&moves[..4], &[5, 6, 9, 10]);
        assert_eq!(&moves[12..], &[0, 3, 12, 15]);
    }

    #[test]
    fn test_skips_occupied_cells() {
        let board = BoardState::with_marks(3, &[(4, Player::X), (1, Player::O)]).unwrap();
        assert_eq!(ordered_moves(&board), vec![3, 5, 7, 0, 2, 6, 8]);
    }

    #[test]
    fn test_opening_candidates() {
        assert_eq!(opening_candidates(1), vec![0]);
        assert_eq!(opening_candidates(3), vec![4]);
        assert_eq!(opening_candidates(5), vec![12]);
        assert_eq!(opening_candidates(2), vec![0, 1, 2, 3]);
        assert_eq!(opening_candidates(4), vec![5, 6, 9, 10]);
        assert_eq!(opening_candidates(6), vec![14, 15, 20, 21]);
    }
}
