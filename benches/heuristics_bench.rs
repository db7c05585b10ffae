use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eight_puzzle::engine::{apply_action, generate_actions, step_cost, Action};
use eight_puzzle::solver::solve_astar;
use eight_puzzle::utils::scramble;
use eight_puzzle::{CostModel, Heuristic, Node, PuzzleConfig, GOAL_STATE};

fn bench_heuristics(c: &mut Criterion) {
    let node = Node::root(scramble(&GOAL_STATE, 40, 1));
    let config = PuzzleConfig::default();
    for heuristic in Heuristic::ALL {
        c.bench_function(&format!("heuristic_{}", heuristic), |b| {
            b.iter(|| heuristic.evaluate(black_box(&node), black_box(&config)))
        });
    }
}

fn bench_transitions(c: &mut Criterion) {
    let board = scramble(&GOAL_STATE, 40, 2);
    c.bench_function("generate_and_apply", |b| {
        b.iter(|| {
            let board = black_box(&board);
            generate_actions(board)
                .into_iter()
                .map(|a| {
                    let next = apply_action(board, a);
                    step_cost(board, a, &next)
                })
                .sum::<u64>()
        })
    });
    c.bench_function("apply_illegal_action", |b| {
        let top = apply_action(&GOAL_STATE, Action::Up);
        b.iter(|| apply_action(black_box(&top), black_box(Action::Up)))
    });
}

fn bench_solve(c: &mut Criterion) {
    let start = scramble(&GOAL_STATE, 20, 3);
    let config = PuzzleConfig::default()
        .with_heuristic(Heuristic::Manhattan)
        .with_cost_model(CostModel::Unit);
    c.bench_function("astar_manhattan_unit_20_moves", |b| {
        b.iter(|| solve_astar(black_box(&start), black_box(&config)))
    });
}

criterion_group!(benches, bench_heuristics, bench_transitions, bench_solve);
criterion_main!(benches);
