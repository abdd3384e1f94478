//! Game rules for five-in-a-row
//!
//! Freestyle rules: five or more in a row along any axis wins, no forbidden
//! moves, no captures.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_five_line_at_pos, has_five_at_pos, run_length, wins_through};
