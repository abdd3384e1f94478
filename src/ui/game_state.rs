//! Game state management for the desktop client

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::rules::find_five_line_at_pos;
use crate::{AIEngine, Board, MoveResult, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// What a background search was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTask {
    /// Play the result for the engine's side
    Move,
    /// Show the result as a hint
    Hint,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        task: AiTask,
    },
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` when the board filled up without a five
    pub winner: Option<Stone>,
    pub winning_line: Option<Vec<Pos>>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Side to move
    pub fn current_turn(&self) -> Stone {
        self.board.turn()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human at `pos`
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !self.board.is_empty(pos) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Play `pos` for the side to move (human or AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn();
        self.board.play(pos);
        self.move_history.push(pos);
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if let Some(line) = find_five_line_at_pos(&self.board, pos) {
            debug!("{:?} wins with {} stones in a row", color, line.len());
            self.game_over = Some(GameResult {
                winner: Some(color),
                winning_line: Some(line),
            });
        } else if self.board.is_full() {
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
        } else {
            self.move_timer.start();
        }
    }

    /// Run the engine for the side to move on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        self.spawn_search(AiTask::Move);
    }

    fn spawn_search(&mut self, task: AiTask) {
        let board = self.board.clone();
        let color = self.current_turn();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            task,
        };
    }

    /// Apply the engine's move or hint once it has arrived
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                task,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed(), *task)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("engine thread exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed, task)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.ai_thinking_time = Some(elapsed);

            match (task, move_result.best_move) {
                (AiTask::Hint, hint) => self.suggested_move = hint,
                (AiTask::Move, Some(pos)) if self.board.is_empty(pos) => self.execute_move(pos),
                (AiTask::Move, _) => self.message = Some("AI could not find a move".to_string()),
            }
            self.last_ai_result = Some(move_result);
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to move (hotseat hint)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }
        self.spawn_search(AiTask::Hint);
    }

    /// Take back the last move, or the last human/AI pair in PvE
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };
        for _ in 0..undo_count {
            if let Some(pos) = self.move_history.pop() {
                self.board.undo(pos);
            }
        }

        self.game_over = None;
        self.last_move = self.move_history.last().copied();
        self.suggested_move = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_move_alternates_turn() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.current_turn(), Stone::White);
        assert!(state.try_place_stone(Pos::new(7, 7)).is_err());
    }

    #[test]
    fn test_pve_blocks_human_on_ai_turn() {
        let mut state = GameState::new(GameMode::PvE {
            human_color: Stone::White,
        });
        assert!(state.is_ai_turn());
        assert!(state.try_place_stone(Pos::new(7, 7)).is_err());
    }

    #[test]
    fn test_five_ends_game_with_line() {
        let mut state = GameState::new(GameMode::PvP);
        for c in 0..4 {
            state.try_place_stone(Pos::new(0, c)).unwrap();
            state.try_place_stone(Pos::new(1, c)).unwrap();
        }
        state.try_place_stone(Pos::new(0, 4)).unwrap();

        let result = state.game_over.clone().unwrap();
        assert_eq!(result.winner, Some(Stone::Black));
        assert_eq!(result.winning_line.map(|l| l.len()), Some(5));
        assert!(state.try_place_stone(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_undo_restores_board_and_turn() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(7, 8)).unwrap();
        state.undo();
        assert_eq!(state.current_turn(), Stone::White);
        assert_eq!(state.board.get(Pos::new(7, 8)), Stone::Empty);
        assert_eq!(state.last_move, Some(Pos::new(7, 7)));
    }

    fn wait_for_search(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_suggestion_runs_in_background() {
        let mut state = GameState::new(GameMode::PvP);
        state.request_suggestion();
        assert!(state.is_ai_thinking());
        // Placing is refused until the hint arrives
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());

        wait_for_search(&mut state);
        assert!(!state.is_ai_thinking());
        assert_eq!(state.suggested_move, Some(Pos::center()));
        assert!(state.move_history.is_empty());
        assert_eq!(state.current_turn(), Stone::Black);
    }

    #[test]
    fn test_engine_reply_is_played() {
        let mut state = GameState::new(GameMode::PvE {
            human_color: Stone::White,
        });
        state.start_ai_thinking();
        wait_for_search(&mut state);
        assert_eq!(state.move_history, vec![Pos::center()]);
        assert_eq!(state.current_turn(), Stone::White);
    }
}
