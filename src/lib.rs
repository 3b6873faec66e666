//! # 8-Puzzle Solver Library
//!
//! This library provides the core game logic for the sliding-tile
//! 8-puzzle and an A* solver that finds optimal solution paths.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `ai_solver`: Takes a board (or scrambles one) and outputs the optimal
//!   sequence of moves to the goal.
//! - `difficulty_evaluator`: Profiles the scramble difficulty tiers over
//!   seeded runs.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), move legality
//!   rules, and the inversion-parity solvability test.
//! - `heuristics`: Admissible distance estimates (Manhattan sum, misplaced
//!   tiles) used to order the search and judge scramble difficulty.
//! - `solver`: Provides the `solve` function, the `Solution` path type,
//!   and the solver's typed failures.
//! - `scramble`: Difficulty profiles and the random-walk scrambler.
//! - `utils`: Provides utility functions, such as parsing boards from text.

pub mod engine;
pub mod heuristics;
pub mod scramble;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g. `eightpuzzle_solver::solver::solve()`. This keeps the
// top-level library namespace cleaner.
