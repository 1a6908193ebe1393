//! Property tests for the collision, rotation, line-clear and session rules.
//!
//! Boards are generated as random fill masks; pieces get a random kind,
//! rotation and position, including poses partly off the board.

use proptest::prelude::*;

use blockfall::core::{
    clear_lines, collides, rotate_with_kicks, Board, GameConfig, GameSession, Piece,
};
use blockfall::types::{Color, Command, PieceKind, TICK_MS};

const W: u8 = 10;
const H: u8 = 20;

fn board_from_mask(mask: &[bool]) -> Board {
    let mut board = Board::new(W, H);
    for (i, &filled) in mask.iter().enumerate() {
        if filled {
            board.set_cell((i % W as usize) as i32, (i / W as usize) as i32, Color::Blue);
        }
    }
    board
}

fn piece(kind_idx: usize, turns: u8, x: i32, y: i32) -> Piece {
    let mut p = Piece::new(PieceKind::from_index(kind_idx), W);
    for _ in 0..turns {
        p.rotate_clockwise();
    }
    p.x = x;
    p.y = y;
    p
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::SoftDrop),
        Just(Command::Rotate),
        Just(Command::HardDrop),
        Just(Command::Hold),
    ]
}

proptest! {
    #[test]
    fn collides_matches_cell_by_cell_definition(
        mask in prop::collection::vec(any::<bool>(), (W as usize) * (H as usize)),
        kind in 0usize..7,
        turns in 0u8..4,
        x in -4i32..12,
        y in -4i32..22,
    ) {
        let board = board_from_mask(&mask);
        let p = piece(kind, turns, x, y);

        let expected = p.cells().iter().any(|&(cx, cy)| {
            cx < 0
                || cx >= W as i32
                || cy >= H as i32
                || (cy >= 0 && mask[(cy as usize) * (W as usize) + cx as usize])
        });
        prop_assert_eq!(collides(&board, &p, 0, 0), expected);
    }

    #[test]
    fn rotation_success_never_collides_and_failure_restores(
        mask in prop::collection::vec(prop::bool::weighted(0.3), (W as usize) * (H as usize)),
        kind in 0usize..7,
        turns in 0u8..4,
        x in -1i32..10,
        y in -1i32..20,
    ) {
        let board = board_from_mask(&mask);
        let mut p = piece(kind, turns, x, y);
        let before = p;

        match rotate_with_kicks(&board, &mut p) {
            Some((dx, dy)) => {
                prop_assert!(!collides(&board, &p, 0, 0));
                prop_assert_eq!((p.x, p.y), (before.x + dx, before.y + dy));
                prop_assert_eq!(p.shape, before.shape.rotated_clockwise());
            }
            None => prop_assert_eq!(p, before),
        }
    }

    #[test]
    fn clear_lines_keeps_dimensions_and_row_order(
        mask in prop::collection::vec(prop::bool::weighted(0.8), (W as usize) * (H as usize)),
        score in 0u32..100_000,
    ) {
        let mut board = board_from_mask(&mask);
        let survivors: Vec<Vec<bool>> = board
            .rows()
            .filter(|row| row.iter().any(|c| c.is_none()))
            .map(|row| row.iter().map(|c| c.is_some()).collect())
            .collect();
        let full = H as usize - survivors.len();

        let (cleared, new_score) = clear_lines(&mut board, score);

        prop_assert_eq!(cleared as usize, full);
        prop_assert_eq!(new_score, score + 100 * cleared);
        prop_assert_eq!((board.width(), board.height()), (W, H));

        let rows: Vec<Vec<bool>> = board
            .rows()
            .map(|row| row.iter().map(|c| c.is_some()).collect())
            .collect();
        for row in &rows[..full] {
            prop_assert!(row.iter().all(|&c| !c));
        }
        prop_assert_eq!(&rows[full..], &survivors[..]);
    }

    #[test]
    fn session_rollout_respects_rules(
        seed in any::<u32>(),
        script in prop::collection::vec(prop::option::of(command_strategy()), 1..300),
    ) {
        let mut s = GameSession::new(GameConfig::default(), seed).unwrap();
        for cmd in script {
            let cmds: &[Command] = match &cmd {
                Some(c) => std::slice::from_ref(c),
                None => &[],
            };
            s.step(TICK_MS, cmds);

            prop_assert_eq!(s.score(), 100 * s.lines());
            prop_assert!((1..=9).contains(&s.level()));
            prop_assert!((100..=500).contains(&s.drop_interval_ms()));
            if !s.game_over() {
                prop_assert!(!collides(s.board(), s.active(), 0, 0));
                prop_assert!(s.board().rows().all(|row| row.iter().any(|c| c.is_none())));
            }
        }
    }
}
