//! A single game room: seated players, cursors and placed stones

use crate::board::{Board, Pos, Stone};
use crate::error::{GameError, HostError};
use crate::rules::wins_through;

/// Capacity limits for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub max_rooms: usize,
    pub max_players: usize,
    pub max_stones: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_rooms: 10,
            max_players: 50,
            max_stones: 256,
        }
    }
}

/// A connected player and their board cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub cursor: Pos,
    /// Seat color; `None` for spectators
    pub seat: Option<Stone>,
}

/// A stone as recorded by the room, in placement order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedStone {
    pub pos: Pos,
    pub color: Stone,
}

/// Game room state.
///
/// The first two players to join take Black and White; everyone after that
/// spectates. Black places first and colors alternate from there.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    players: Vec<Player>,
    stones: Vec<PlacedStone>,
    board: Board,
    winner: Option<Stone>,
    /// Bumped by every placement and reset
    generation: u64,
    max_players: usize,
    max_stones: usize,
}

impl Room {
    pub fn new(name: impl Into<String>, config: &HostConfig) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
            stones: Vec::new(),
            board: Board::new(),
            winner: None,
            generation: 0,
            max_players: config.max_players,
            max_stones: config.max_stones,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn stones(&self) -> &[PlacedStone] {
        &self.stones
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Color allowed to place next
    pub fn can_place(&self) -> Stone {
        self.board.turn()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Changes whenever the position changes; compare before applying a move
    /// computed from an earlier snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seat a player, or return the existing entry if already present.
    pub fn join(&mut self, id: u32) -> Result<Player, HostError> {
        if let Some(player) = self.player(id) {
            return Ok(*player);
        }
        if self.players.len() >= self.max_players {
            return Err(HostError::RoomFull {
                room: self.name.clone(),
                limit: self.max_players,
            });
        }

        let seat = [Stone::Black, Stone::White]
            .into_iter()
            .find(|&color| self.players.iter().all(|p| p.seat != Some(color)));
        let player = Player {
            id,
            cursor: Pos::center(),
            seat,
        };
        self.players.push(player);
        Ok(player)
    }

    /// Remove a player; returns whether they were present.
    pub fn leave(&mut self, id: u32) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    /// Move a player's cursor. Moves that would leave the board are ignored.
    pub fn move_cursor(&mut self, id: u32, d_row: i32, d_col: i32) -> Result<Pos, HostError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(HostError::NotInRoom(id))?;
        if let Some(next) = player.cursor.offset(d_row, d_col, 1) {
            player.cursor = next;
        }
        Ok(player.cursor)
    }

    /// Place a `color` stone at `(row, col)`.
    pub fn place(&mut self, row: i32, col: i32, color: Stone) -> Result<Pos, HostError> {
        if self.is_over() {
            return Err(HostError::GameOver);
        }
        let pos = Pos::try_new(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        if self.stones.len() >= self.max_stones {
            return Err(HostError::StoneLimit(self.max_stones));
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied {
                row: pos.row,
                col: pos.col,
            }
            .into());
        }
        if color != self.can_place() {
            return Err(HostError::WrongTurn {
                expected: self.can_place(),
            });
        }

        self.board.play(pos);
        self.stones.push(PlacedStone { pos, color });
        self.generation += 1;
        if wins_through(&self.board, pos) {
            self.winner = Some(color);
        }
        Ok(pos)
    }

    /// Place for a seated player, at `target` or at their cursor.
    pub fn place_for(&mut self, id: u32, target: Option<(i32, i32)>) -> Result<Pos, HostError> {
        let player = *self.player(id).ok_or(HostError::NotInRoom(id))?;
        let color = player.seat.ok_or(HostError::Spectator(id))?;
        let (row, col) = target.unwrap_or((player.cursor.row as i32, player.cursor.col as i32));
        self.place(row, col, color)
    }

    /// Clear the board and recenter cursors; Black places first again.
    pub fn reset(&mut self) {
        self.stones.clear();
        self.board = Board::new();
        self.winner = None;
        self.generation += 1;
        for player in &mut self.players {
            player.cursor = Pos::center();
        }
    }

    /// Board copy for the engine, with the side to move set to `can_place`.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }
}
