pub mod client;
pub mod grid;
pub mod request;

pub use client::{SolveError, SolveOutcome, Solved, submit};
pub use grid::Grid;
pub use request::{SolveStatus, SolveTracker};
