use clap::{Parser, ValueEnum};
use eight_puzzle::solver::{solve_astar, solve_ida, Solution};
use eight_puzzle::utils::{board_from_str_array, scramble};
use eight_puzzle::{apply_action, Board, CostModel, Heuristic, PuzzleConfig};
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Astar,
    Ida,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board as nine digits, e.g. "283164705" or "2 8 3 / 1 6 4 / 7 0 5"
    #[clap(short, long, conflicts_with_all = ["board_file", "scramble"])]
    board: Option<String>,

    /// Path to a board file (three rows of three cells)
    #[clap(short = 'f', long)]
    board_file: Option<PathBuf>,

    /// Scramble the goal with this many random moves instead of reading a board
    #[clap(short, long)]
    scramble: Option<usize>,

    /// Seed for --scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    #[clap(long, value_enum, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    #[clap(long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,

    #[clap(long, value_enum, default_value_t = CostModel::TileWeighted)]
    cost: CostModel,

    /// Inflation factor for the epsilon-weighted heuristic
    #[clap(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Goal board, defaults to 1 2 3 / 8 0 4 / 7 6 5
    #[clap(long)]
    goal: Option<String>,

    /// Threshold increases IDA* may make before giving up
    #[clap(long, default_value_t = 100)]
    max_iterations: u32,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn load_start(args: &Args, goal: &Board) -> Result<Board, String> {
    if let Some(text) = &args.board {
        return text
            .parse()
            .map_err(|e| format!("Invalid board '{}': {}", text, e));
    }
    if let Some(path) = &args.board_file {
        return read_board_file(path);
    }
    let moves = args
        .scramble
        .ok_or_else(|| "Provide --board, --board-file or --scramble".to_string())?;
    Ok(scramble(goal, moves, args.seed))
}

fn build_config(args: &Args) -> Result<PuzzleConfig, String> {
    let mut config = PuzzleConfig::default()
        .with_heuristic(args.heuristic)
        .with_cost_model(args.cost)
        .with_epsilon(args.epsilon)
        .map_err(|e| e.to_string())?;
    if let Some(goal) = &args.goal {
        let goal = goal
            .parse()
            .map_err(|e| format!("Invalid goal '{}': {}", goal, e))?;
        config = config.with_goal(goal);
    }
    Ok(config)
}

fn print_solution(start: &Board, solution: &Solution) {
    println!("Solution found:\n");
    println!("Moves ({}):", solution.steps());
    if solution.actions.is_empty() {
        println!("  No moves made.");
    }
    let mut board = *start;
    for (i, action) in solution.actions.iter().enumerate() {
        board = apply_action(&board, *action);
        println!("  Move {}: {}", i + 1, action);
    }
    println!("Path cost: {}", solution.cost);
    println!("Expanded nodes: {}\n", solution.expanded);
    println!("Final board state:\n{}\n", board);
}

fn run(args: Args) -> Result<(), String> {
    let config = build_config(&args)?;
    let start = load_start(&args, &config.goal)?;

    println!("Initial board state:\n{}\n", start);
    info!(
        "searching with {:?}, heuristic {}, cost model {:?}",
        args.algorithm, config.heuristic, config.cost_model
    );

    let solution = match args.algorithm {
        Algorithm::Astar => solve_astar(&start, &config),
        Algorithm::Ida => solve_ida(&start, &config, args.max_iterations),
    };

    match solution {
        Some(solution) => print_solution(&start, &solution),
        None => println!("No solution found.\n"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
