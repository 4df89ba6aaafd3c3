//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_draw, run_benchmark};
pub use interactive::{SessionSummary, run_interactive, run_session};
pub use solve::{SolveConfig, SolveResult, solve_letters};
