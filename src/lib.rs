// Reusable library API for the `crossfill` binary
pub mod assignment;
mod consistency;
pub mod domain;
pub mod errors;
mod heuristics;
pub mod log;
pub mod render;
pub mod solver;
pub mod structure;
pub mod word_list;

pub use assignment::Assignment;
pub use solver::{solve, SolveOptions, SolveOutcome, SolveReport, SolveStats, Solver};
pub use structure::{Direction, Slot, Structure};
pub use word_list::{Word, WordList};
