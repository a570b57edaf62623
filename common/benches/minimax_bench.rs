use common::games::SessionRng;
use common::games::tictactoe::{
    Board, Difficulty, Mark, Position, calculate_minimax_move, evaluate, outcome, select_move,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn board_after(moves: &[(usize, usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(row, col, mark) in moves {
        board
            .mark(Position::new(row, col), mark)
            .expect("benchmark setup uses empty cells");
    }
    board
}

fn bench_evaluate_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_evaluate_empty_board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            evaluate(black_box(&mut board), true)
        });
    });
}

fn bench_reply_to_corner_opening(c: &mut Criterion) {
    let board = board_after(&[(0, 0, Mark::Human)]);
    c.bench_function("minimax_reply_to_corner_opening", |b| {
        b.iter(|| calculate_minimax_move(black_box(&board)));
    });
}

fn bench_reply_mid_game(c: &mut Criterion) {
    let board = board_after(&[
        (0, 0, Mark::Human),
        (1, 1, Mark::Ai),
        (2, 2, Mark::Human),
    ]);
    c.bench_function("minimax_reply_mid_game", |b| {
        b.iter(|| calculate_minimax_move(black_box(&board)));
    });
}

fn bench_full_hard_game(c: &mut Criterion) {
    c.bench_function("minimax_full_game_vs_first_free_cell", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(0);
            let mut board = Board::new();
            while let Some(&pos) = board.available_moves().first() {
                board.mark(pos, Mark::Human).expect("cell taken from available moves");
                if outcome(&board).is_some() {
                    break;
                }
                select_move(&mut board, Difficulty::Hard, &mut rng).expect("board not full");
                if outcome(&board).is_some() {
                    break;
                }
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_evaluate_empty_board,
    bench_reply_to_corner_opening,
    bench_reply_mid_game,
    bench_full_hard_game
);
criterion_main!(benches);
