//! Benchmarks for the hot paths of refereeing a move: generating a piece's
//! destinations, building the attack map, and proving or refuting mate.

use chess_rules::board::color::Color;
use chess_rules::board::Board;
use chess_rules::chess_position;
use chess_rules::game::ChessMatch;
use chess_rules::move_generation::{attacked_squares, generate, MoveContext};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_positions() -> Vec<(&'static str, Board)> {
    vec![
        ("starting", Board::starting_position()),
        (
            "middlegame",
            chess_position! {
                r...k..r
                ppp..ppp
                ..nqbn..
                ...pp...
                ...PP...
                ..NQBN..
                PPP..PPP
                R...K..R
            },
        ),
        (
            "endgame",
            chess_position! {
                ........
                .....k..
                ........
                ...p....
                ...P....
                ........
                .....K..
                ........
            },
        ),
    ]
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");
    for (name, board) in benchmark_positions() {
        group.bench_with_input(BenchmarkId::new("all_pieces", name), &board, |b, board| {
            b.iter(|| {
                board
                    .pieces()
                    .map(|(position, _)| {
                        generate(black_box(board), position, MoveContext::default()).count()
                    })
                    .sum::<usize>()
            })
        });
        group.bench_with_input(BenchmarkId::new("attacked_squares", name), &board, |b, board| {
            b.iter(|| attacked_squares(black_box(board), Color::Black))
        });
    }
    group.finish();
}

fn bench_checkmate_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkmate_detection");

    // the last move of fool's mate forces a full search for escapes
    group.bench_function("fools_mate", |b| {
        b.iter(|| {
            let mut chess_match = ChessMatch::new();
            let moves = [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")];
            for (source, target) in moves.iter() {
                chess_match
                    .perform_move_at(source.parse().unwrap(), target.parse().unwrap())
                    .unwrap();
            }
            black_box(chess_match.is_checkmate())
        })
    });

    // check with many candidate replies, none of which is mate
    let board = chess_position! {
        rnbqkbnr
        ppppp.pp
        .....p..
        .......Q
        ....P...
        ........
        PPPP.PPP
        RNB.KBNR
    };
    group.bench_function("check_with_escape", |b| {
        b.iter(|| ChessMatch::from_board(black_box(board.clone()), Color::Black).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_checkmate_detection);
criterion_main!(benches);
