use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_lines, collides, try_rotate, Board, GameConfig, GameSession, Piece};
use blockfall::types::{Color, Command, PieceKind, TICK_MS};

fn bench_step(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::default(), 12345).unwrap();

    c.bench_function("session_step_33ms", |b| {
        b.iter(|| {
            if session.game_over() {
                session.apply_command(Command::Retry);
            }
            session.step(black_box(TICK_MS), &[]);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, Color::Cyan);
                }
            }
            clear_lines(black_box(&mut board), 0)
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new(10, 20);
    let piece = Piece::new(PieceKind::T, 10);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&board), black_box(&piece), 0, 1))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new(10, 20);
    let mut piece = Piece::new(PieceKind::I, 10);
    piece.y = 5;

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| try_rotate(black_box(&board), &mut piece))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::default(), 12345).unwrap();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if session.game_over() {
                session.apply_command(Command::Retry);
            }
            session.apply_command(black_box(Command::HardDrop));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(GameConfig::default(), 12345).unwrap();
    let mut snap = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_collides,
    bench_rotate,
    bench_hard_drop,
    bench_snapshot
);
criterion_main!(benches);
