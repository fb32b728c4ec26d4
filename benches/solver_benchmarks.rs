use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use resilio::examples::{map_colouring, sudoku};
use resilio::solver::assignment::Assignment;
use resilio::solver::engine::Csp;
use resilio::solver::heuristics::variable::{
    DegreeHeuristic, MinimumRemainingValuesHeuristic, SelectFirstHeuristic,
    VariableSelectionHeuristic,
};

const GIVENS: [(usize, usize, i64); 4] = [(1, 2, 3), (2, 1, 4), (3, 3, 3), (3, 4, 2)];

fn seeded_sudoku(
    heuristic: Box<dyn VariableSelectionHeuristic<i64>>,
) -> (Csp<i64>, Assignment<i64>) {
    let mut csp = sudoku::build_csp()
        .unwrap()
        .with_variable_heuristic(heuristic);
    let initial = sudoku::seed_givens(&mut csp, &GIVENS).unwrap();
    (csp, initial)
}

fn sudoku_heuristic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("4x4 Sudoku Heuristics");

    group.bench_function("SelectFirst", |b| {
        b.iter_batched(
            || seeded_sudoku(Box::new(SelectFirstHeuristic)),
            |(mut csp, initial)| {
                let (solution, _stats) = csp.solve(black_box(initial)).unwrap();
                assert!(solution.is_some());
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("MinimumRemainingValues", |b| {
        b.iter_batched(
            || seeded_sudoku(Box::new(MinimumRemainingValuesHeuristic)),
            |(mut csp, initial)| {
                let (solution, _stats) = csp.solve(black_box(initial)).unwrap();
                assert!(solution.is_some());
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Degree", |b| {
        b.iter_batched(
            || seeded_sudoku(Box::new(DegreeHeuristic)),
            |(mut csp, initial)| {
                let (solution, _stats) = csp.solve(black_box(initial)).unwrap();
                assert!(solution.is_some());
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn map_colouring_benchmark(c: &mut Criterion) {
    c.bench_function("australia map colouring", |b| {
        b.iter_batched(
            || map_colouring::build_csp().unwrap(),
            |mut csp| {
                let (solution, _stats) = csp.solve(black_box(Assignment::new())).unwrap();
                assert!(solution.is_some());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, sudoku_heuristic_benchmarks, map_colouring_benchmark);
criterion_main!(benches);
