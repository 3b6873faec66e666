use clap::Parser;
use eightpuzzle_solver::engine::Board;
use eightpuzzle_solver::heuristics::manhattan_distance;
use eightpuzzle_solver::scramble::{scramble, scramble_with_seed, Difficulty};
use eightpuzzle_solver::solver::solve;
use eightpuzzle_solver::utils::board_from_str;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board as nine cells 0-8, 0 for the blank ("125340678" or "1 2 5 3 4 0 6 7 8")
    board: Option<String>,

    /// Scramble a fresh board at this difficulty instead of reading one
    #[clap(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the scramble, for reproducible runs
    #[clap(short, long, requires = "difficulty")]
    seed: Option<u64>,
}

fn resolve_board(args: &Args) -> Result<Board, String> {
    match (&args.board, args.difficulty) {
        (Some(text), _) => {
            board_from_str(text).map_err(|e| format!("Invalid board format: {}", e))
        }
        (None, Some(difficulty)) => {
            let profile = difficulty.profile();
            Ok(match args.seed {
                Some(seed) => scramble_with_seed(profile, seed),
                None => scramble(profile),
            })
        }
        (None, None) => Err("Provide a board, or --difficulty to scramble one.".to_owned()),
    }
}

fn main() {
    let args = Args::parse();

    let board = match resolve_board(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    println!("Start board (Manhattan estimate {}):", manhattan_distance(&board));
    println!("{}\n", board);
    println!("Searching for an optimal solution...\n");

    match solve(&board) {
        Ok(solution) => {
            println!("Solution found: {} moves\n", solution.moves());
            if solution.moves() == 0 {
                println!("Board is already solved.");
            }
            for (i, (tile, step)) in solution
                .moved_tiles()
                .iter()
                .zip(solution.path.iter().skip(1))
                .enumerate()
            {
                println!("Move {}: slide tile {}", i + 1, tile);
                println!("{}\n", step);
            }
            println!(
                "Nodes created: {}, expanded: {}",
                solution.created_nodes, solution.expanded_nodes
            );
        }
        Err(err) => {
            eprintln!("No solution: {}", err);
            std::process::exit(1);
        }
    }
}
