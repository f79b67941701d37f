//! Property tests over arbitrary boards and move sequences.

use proptest::prelude::*;
use strictly_tictactoe::{
    detect_outcome, Board, GameHistory, HistoryInvariants, InvariantSet, MoveError, Outcome,
    Player, Position, Square, LINES,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn line_owned_by(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
}

/// Plays `cells` from a new game, skipping rejected ones.
fn play(cells: &[usize]) -> (GameHistory, Vec<Position>) {
    let mut history = GameHistory::new();
    let mut accepted = Vec::new();
    for &cell in cells {
        if let Ok(next) = history.apply_move(cell) {
            history = next;
            accepted.push(Position::ALL[cell]);
        }
    }
    (history, accepted)
}

proptest! {
    #[test]
    fn outcome_matches_lines(board in board()) {
        let x_line = line_owned_by(&board, Player::X);
        let o_line = line_owned_by(&board, Player::O);
        let full = board.squares().iter().all(|s| *s != Square::Empty);

        match detect_outcome(&board) {
            Outcome::Win(player) => prop_assert!(line_owned_by(&board, player)),
            Outcome::Draw => prop_assert!(!x_line && !o_line && full),
            Outcome::InProgress => prop_assert!(!x_line && !o_line && !full),
        }
    }

    #[test]
    fn turn_parity_holds(cells in prop::collection::vec(0usize..9, 0..20)) {
        let (history, accepted) = play(&cells);

        prop_assert_eq!(history.current_move(), accepted.len());
        prop_assert_eq!(history.moves(), accepted.clone());
        for (k, pos) in accepted.iter().enumerate() {
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(history.snapshots()[k + 1].get(*pos), Square::Occupied(expected));
        }
        prop_assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn occupied_cell_never_changes_history(cells in prop::collection::vec(0usize..9, 1..9)) {
        let (history, accepted) = play(&cells);
        prop_assume!(!accepted.is_empty());

        let taken = accepted[0].to_index();
        prop_assert_eq!(
            history.apply_move(taken),
            Err(MoveError::CellOccupied(accepted[0]))
        );
    }

    #[test]
    fn jump_then_move_truncates(
        cells in prop::collection::vec(0usize..9, 2..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let (history, _) = play(&cells);
        let n = history.len();
        prop_assume!(n >= 2);

        let j = pick.index(n - 1);
        let rewound = history.jump_to(j).unwrap();
        prop_assert_eq!(rewound.snapshots(), history.snapshots());

        let free = Position::valid_moves(rewound.current_board());
        prop_assume!(!rewound.outcome().is_over() && !free.is_empty());

        let branched = rewound.apply_move(free[0].to_index()).unwrap();
        prop_assert_eq!(branched.len(), j + 2);
        prop_assert_eq!(&branched.snapshots()[..=j], &history.snapshots()[..=j]);
    }
}
