#[macro_use]
extern crate criterion;

use criterion::Criterion;
use sudoku_reasoner::{Grid, Solver};

const PUZZLES: &[&str] = &[
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
];

const SEVENTEEN: &str =
    "000000010400000000020000000000050407008000300001090000300400200050100000000806000";

const TWO_SOLUTIONS: &str =
    "534678912672195348198342567859761423426853791713924856961.3728.287.1963.345286179";

fn read_puzzles(lines: &[&str]) -> Vec<Grid> {
    lines
        .iter()
        .map(|line| Grid::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

fn _1_solve_mixed_puzzles(c: &mut Criterion) {
    let puzzles = read_puzzles(PUZZLES);
    let mut iter = puzzles.iter().cycle();
    c.bench_function("_1_solve_mixed_puzzles", |b| {
        b.iter(|| {
            let puzzle = iter.next().unwrap();
            Solver::new().solve(puzzle).unwrap()
        })
    });
}

fn _2_solve_seventeen_clues(c: &mut Criterion) {
    let puzzle = Grid::from_str_line(SEVENTEEN).unwrap();
    c.bench_function("_2_solve_seventeen_clues", |b| {
        b.iter(|| Solver::new().solve(&puzzle).unwrap())
    });
}

fn _3_enumerate_two_solutions(c: &mut Criterion) {
    let puzzle = Grid::from_str_line(TWO_SOLUTIONS).unwrap();
    c.bench_function("_3_enumerate_two_solutions", |b| {
        b.iter(|| Solver::new().solve_all(&puzzle).unwrap())
    });
}

criterion_group!(
    benches,
    _1_solve_mixed_puzzles,
    _2_solve_seventeen_clues,
    _3_enumerate_two_solutions,
);
criterion_main!(benches);
