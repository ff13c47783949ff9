//! Step-by-step N-Queens backtracking, built to be watched.
//!
//! [`Solver`] is a lazy iterator over [`Step`]s: every placement attempt,
//! safety check, conflict and backtrack of a depth-first search that stops at
//! the first solution. [`Playback`] paces a solver for the egui viewer.

pub mod board;
pub mod config;
pub mod error;
pub mod playback;
pub mod solver;
pub mod step;
pub mod theme;

pub use board::{Board, Cell, Safety};
pub use error::{Error, Result};
pub use playback::{Highlights, Mark, Phase, Playback};
pub use solver::Solver;
pub use step::{Metadata, Step, StepKind};
