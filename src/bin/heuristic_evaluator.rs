use clap::Parser;
use eight_puzzle::solver::solve_astar;
use eight_puzzle::utils::scramble;
use eight_puzzle::{CostModel, Heuristic, PuzzleConfig, GOAL_STATE};
use log::{debug, warn};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare heuristics over seeded scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Random moves applied to the goal for each board
    #[clap(short, long, default_value_t = 30)]
    moves: usize,

    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    #[clap(long, value_enum, default_value_t = CostModel::TileWeighted)]
    cost: CostModel,
}

#[derive(Default)]
struct Totals {
    expanded: Vec<usize>,
    cost: Vec<u64>,
    steps: Vec<usize>,
}

fn average<T: Copy + Into<f64>>(values: &[T]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v.into()).sum::<f64>() / values.len() as f64
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut all_totals: HashMap<Heuristic, Totals> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards ({} scramble moves)...",
        args.boards, args.moves
    );

    for board_idx in 0..args.boards {
        let current_seed = args.start_seed + board_idx as u64;
        let initial_board = scramble(&GOAL_STATE, args.moves, current_seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);
        debug!("board {}:\n{}", board_idx, initial_board);

        for heuristic in Heuristic::ALL {
            let config = PuzzleConfig::default()
                .with_heuristic(heuristic)
                .with_cost_model(args.cost);

            let Some(solution) = solve_astar(&initial_board, &config) else {
                warn!(
                    "heuristic {} found no solution on board {} (seed {})",
                    heuristic, board_idx, current_seed
                );
                continue;
            };

            println!(
                "  Heuristic: {:<28} Cost: {:<8} Steps: {:<4} Expanded: {}",
                heuristic,
                solution.cost,
                solution.steps(),
                solution.expanded
            );
            let totals = all_totals.entry(heuristic).or_default();
            totals.expanded.push(solution.expanded);
            totals.cost.push(solution.cost);
            totals.steps.push(solution.steps());
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    let mut rows: Vec<(Heuristic, f64, f64, f64)> = Heuristic::ALL
        .iter()
        .filter_map(|h| {
            let totals = all_totals.get(h)?;
            let expanded: Vec<f64> = totals.expanded.iter().map(|&e| e as f64).collect();
            let cost: Vec<f64> = totals.cost.iter().map(|&c| c as f64).collect();
            let steps: Vec<f64> = totals.steps.iter().map(|&s| s as f64).collect();
            Some((*h, average(&expanded), average(&cost), average(&steps)))
        })
        .collect();

    // Fewest expansions first
    rows.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (heuristic, expanded, cost, steps) in rows {
        println!(
            "Heuristic {:<28}: Expanded = {:>10.1}, Cost = {:>10.1}, Steps = {:>5.1}",
            heuristic, expanded, cost, steps
        );
    }
}
