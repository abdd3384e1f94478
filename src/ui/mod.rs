//! Desktop client for five-in-a-row, built on egui/eframe

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameResult, GameState};
