//! Piece tests - shapes, spawn positions, rotation and wall kicks

use blockfall::core::{collides, rotate_with_kicks, spawn_shape, Board, Piece};
use blockfall::types::{Color, PieceKind};

#[test]
fn test_every_kind_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_shape(kind).filled_cells().len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_piece_colors() {
    assert_eq!(Piece::new(PieceKind::I, 10).color, Color::Cyan);
    assert_eq!(Piece::new(PieceKind::O, 10).color, Color::Yellow);
    assert_eq!(Piece::new(PieceKind::T, 10).color, Color::Purple);
    assert_eq!(Piece::new(PieceKind::S, 10).color, Color::Green);
    assert_eq!(Piece::new(PieceKind::Z, 10).color, Color::Red);
    assert_eq!(Piece::new(PieceKind::J, 10).color, Color::Blue);
    assert_eq!(Piece::new(PieceKind::L, 10).color, Color::Orange);
}

#[test]
fn test_spawn_is_centered_at_top() {
    // columns / 2 - shape_cols / 2
    assert_eq!(Piece::new(PieceKind::I, 10).x, 3);
    assert_eq!(Piece::new(PieceKind::O, 10).x, 4);
    assert_eq!(Piece::new(PieceKind::T, 10).x, 4);
    assert_eq!(Piece::new(PieceKind::T, 7).x, 2);
    assert!(PieceKind::ALL.iter().all(|&k| Piece::new(k, 10).y == 0));
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let start = spawn_shape(kind);
        let mut shape = start;
        for _ in 0..4 {
            shape.rotate_clockwise();
        }
        assert_eq!(shape, start, "{:?}", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let mut i = spawn_shape(PieceKind::I);
    i.rotate_clockwise();
    assert_eq!((i.rows(), i.cols()), (4, 1));

    let mut o = spawn_shape(PieceKind::O);
    o.rotate_clockwise();
    assert_eq!(o, spawn_shape(PieceKind::O));
}

#[test]
fn test_left_wall_rotation_fits() {
    let board = Board::new(10, 20);
    // Vertical I on the left wall turns flat without a kick.
    let mut p = Piece::new(PieceKind::I, 10);
    p.rotate_clockwise();
    p.x = 0;
    p.y = 5;
    assert_eq!(rotate_with_kicks(&board, &mut p), Some((0, 0)));
    assert_eq!(p.x, 0);
}

#[test]
fn test_kick_around_stack() {
    let mut board = Board::new(10, 20);
    // Block the bottom cell of the turned T so the plain turn fails.
    let mut p = Piece::new(PieceKind::T, 10);
    p.y = 10;
    board.set_cell(4, 12, Color::Red);
    let kick = rotate_with_kicks(&board, &mut p);
    assert!(kick.is_some());
    assert!(!collides(&board, &p, 0, 0));
}
