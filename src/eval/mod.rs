//! Evaluation module for five-in-a-row positions
//!
//! - Line-run measurement and open three/open four detection
//! - Offense-only static evaluation for the side to move

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{is_forcing, is_open_four, is_open_three, LineRun, PatternScore};
