use clap::Parser;
use eightpuzzle_solver::engine::Board;
use eightpuzzle_solver::scramble::{scramble, scramble_with_seed, Difficulty};
use eightpuzzle_solver::solver::solve;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Difficulty of the scrambled board
    #[clap(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed for reproducible scrambles
    #[clap(short, long)]
    seed: Option<u64>,
}

fn deal_board(args: &Args) -> Board {
    let profile = args.difficulty.profile();
    match args.seed {
        Some(seed) => scramble_with_seed(profile, seed),
        None => scramble(profile),
    }
}

fn main() {
    let args = Args::parse();
    let mut board = deal_board(&args);
    let mut moves_made: u32 = 0;
    let mut started = Instant::now();

    println!("Welcome to the 8-puzzle! Difficulty: {}", args.difficulty);

    loop {
        println!("---------------------");
        println!("Moves: {}", moves_made);
        println!("{}", board);

        if board.is_goal() {
            println!();
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Moves: {}", moves_made);
            println!("Time: {:.1}s", started.elapsed().as_secs_f64());
            println!("---------------------");
            break;
        }

        print!("Slide a tile (1-8), 's' to auto-solve, 'n' for a new board, 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }
        let trimmed = input.trim();

        match trimmed {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "n" => {
                board = deal_board(&args);
                moves_made = 0;
                started = Instant::now();
                continue;
            }
            "s" => {
                match solve(&board) {
                    Ok(solution) => {
                        println!("Optimal finish: {} moves", solution.moves());
                        for (tile, step) in solution
                            .moved_tiles()
                            .iter()
                            .zip(solution.path.iter().skip(1))
                        {
                            println!();
                            println!("Slide tile {}:", tile);
                            println!("{}", step);
                        }
                        board = *solution.path.last().expect("solution path is never empty");
                        moves_made += solution.moves() as u32;
                    }
                    Err(err) => {
                        // Scrambled deals are always solvable; reaching this
                        // means the board state was corrupted somehow.
                        println!("Solver failed: {}", err);
                    }
                }
                continue;
            }
            _ => {}
        }

        match trimmed.parse::<u8>() {
            Ok(tile) if (1..=8).contains(&tile) => {
                let position = board
                    .position_of(tile)
                    .expect("tiles 1-8 are always on the board");
                if let Some(next) = board.apply_move(position) {
                    board = next;
                    moves_made += 1;
                } else {
                    println!("Tile {} is not next to the blank.", tile);
                }
            }
            _ => {
                println!("Invalid input: enter a tile number 1-8, 's', 'n', or 'q'.");
            }
        }
    }
}
