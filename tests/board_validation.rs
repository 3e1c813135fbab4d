//! Board invariants: incremental win detection agrees with full scans

mod common;

use common::{build_state, random_game};
use gridline::{
    BoardState, Cell, Player,
    tictactoe::{Line, LineAnalyzer},
};

mod win_detection {
    use super::*;

    #[test]
    fn test_incremental_winner_matches_full_scan() {
        for size in 1..=7 {
            for seed in 0..40 {
                let (_, history) = random_game(size, seed, usize::MAX);
                for board in &history {
                    assert_eq!(
                        board.winner(),
                        LineAnalyzer::winner(board.cells(), size),
                        "size {size}, seed {seed}:\n{board}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_line_wins_on_larger_boards() {
        for size in [4, 5, 6] {
            for line in Line::all(size) {
                let marks: Vec<_> = line.indices(size).map(|i| (i, Player::O)).collect();
                let board = build_state(size, &marks);
                assert_eq!(board.winner(), Some(Player::O), "{line:?} on {size}x{size}");
            }
        }
    }

    #[test]
    fn test_mixed_lines_do_not_win() {
        // X X X O on the top row of a 4x4 board
        let board = build_state(
            4,
            &[(0, Player::X), (1, Player::X), (2, Player::X), (3, Player::O)],
        );
        assert_eq!(board.winner(), None);

        // Main diagonal broken by O at the far corner
        let board = build_state(
            5,
            &[
                (0, Player::X),
                (6, Player::X),
                (12, Player::X),
                (18, Player::X),
                (24, Player::O),
            ],
        );
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_near_miss_lines_do_not_win() {
        // Three in a row is not enough on 4x4
        let board = build_state(4, &[(5, Player::X), (6, Player::X), (7, Player::X)]);
        assert_eq!(board.winner(), None);

        // Off-centre diagonal segment
        let board = build_state(4, &[(1, Player::X), (6, Player::X), (11, Player::X)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_winner_is_fixed_by_first_completed_line() {
        // X completes row 0, then O completes row 2
        let mut board = build_state(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(board.winner(), Some(Player::X));
        for index in [6, 7, 8] {
            board.place(index, Player::O).unwrap();
            assert_eq!(board.winner(), Some(Player::X));
        }

        // Further marks by the winner leave it unchanged
        board.place(4, Player::X).unwrap();
        assert_eq!(board.winner(), Some(Player::X));

        // Keep placing on random positions past the first win
        for seed in 0..20 {
            let (mut board, _) = random_game(4, seed, usize::MAX);
            let Some(first) = board.winner() else {
                continue;
            };
            let mut player = first.opponent();
            for index in board.available_moves() {
                board.place(index, player).unwrap();
                assert_eq!(board.winner(), Some(first), "seed {seed}:\n{board}");
                player = player.opponent();
            }
        }
    }

    #[test]
    fn test_single_cell_board() {
        let board = build_state(1, &[(0, Player::X)]);
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
    }
}

mod move_accounting {
    use super::*;

    #[test]
    fn test_available_and_occupied_cover_board() {
        for size in 2..=6 {
            for seed in 0..10 {
                let (_, history) = random_game(size, seed, usize::MAX);
                for board in &history {
                    let occupied = board
                        .cells()
                        .iter()
                        .filter(|&&cell| cell != Cell::Empty)
                        .count();
                    assert_eq!(board.available_moves().len() + occupied, size * size);
                    assert_eq!(board.available_moves().len(), board.empty_count());
                }
            }
        }
    }

    #[test]
    fn test_available_moves_are_ascending_and_empty() {
        let board = build_state(4, &[(15, Player::X), (3, Player::O), (8, Player::X)]);
        let moves = board.available_moves();
        assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(moves.iter().all(|&i| board.cell(i) == Some(Cell::Empty)));
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn test_place_then_retract_restores_board() {
        for seed in 0..20 {
            let (mut board, _) = random_game(5, seed, 8);
            if board.is_terminal() {
                continue;
            }
            let before = board.clone();
            for index in board.available_moves() {
                for player in [Player::X, Player::O] {
                    let prior = board.winner();
                    board.place(index, player).unwrap();
                    board.retract(index, prior);
                    assert_eq!(board, before);
                }
            }
        }
    }

    #[test]
    fn test_retract_clears_winner() {
        let mut board = build_state(3, &[(0, Player::X), (1, Player::X)]);
        let prior = board.winner();
        board.place(2, Player::X).unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        board.retract(2, prior);
        assert_eq!(board.winner(), None);
        assert_eq!(board.cell(2), Some(Cell::Empty));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        for seed in 0..10 {
            let (board, _) = random_game(4, seed, usize::MAX);
            let parsed: BoardState = board.to_string().parse().unwrap();
            assert_eq!(parsed, board);
        }
    }

    #[test]
    fn test_parse_rejects_non_square_input() {
        assert!("XO.X".parse::<BoardState>().is_ok());
        assert!(matches!(
            "XO.XO".parse::<BoardState>(),
            Err(gridline::Error::InvalidBoard { .. })
        ));
        assert!("".parse::<BoardState>().is_err());
    }
}
