//! Search module for the five-in-a-row AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - One-ply tactics (immediate win / immediate block)
//! - Threat-space search for forced wins
//! - Negamax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod tactics;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, INF};
pub use candidates::candidates;
pub use tactics::{find_immediate_block, find_immediate_win, find_winning_cell};
pub use threat::{ThreatResult, ThreatSearcher};
