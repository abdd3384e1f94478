//! TCP front end: one thread per client, shared room registry
//!
//! The registry sits behind a mutex. AI moves are computed on a snapshot with
//! the lock released, then applied under the lock again, so a slow search in
//! one room never stalls the others.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use log::{debug, info, warn};

use crate::board::{Board, Pos};
use crate::engine::{AIEngine, EngineConfig};
use crate::error::HostError;

use super::protocol::{encode_error, encode_state, Command};
use super::registry::RoomRegistry;
use super::room::{HostConfig, Room};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Position handed to the engine outside the lock
#[derive(Debug)]
struct AiRequest {
    room: String,
    generation: u64,
    board: Board,
}

/// Shared server state
#[derive(Debug)]
pub struct Host {
    registry: Mutex<RoomRegistry>,
    clients: Mutex<HashMap<u32, TcpStream>>,
    engine: EngineConfig,
    next_id: AtomicU32,
}

impl Host {
    pub fn new(config: HostConfig, engine: EngineConfig) -> Self {
        Self {
            registry: Mutex::new(RoomRegistry::new(config)),
            clients: Mutex::new(HashMap::new()),
            engine,
            next_id: AtomicU32::new(1),
        }
    }

    /// Run `f` with the registry locked.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut RoomRegistry) -> R) -> R {
        f(&mut lock(&self.registry))
    }

    /// Apply one command for `player`.
    ///
    /// Returns the names of the rooms whose state changed and must be broadcast.
    pub fn execute(&self, player: u32, command: Command) -> Result<Vec<String>, HostError> {
        match command {
            Command::Join(room) => {
                let mut registry = lock(&self.registry);
                let previous = registry.room_name_of(player).map(str::to_string);
                registry.join(&room, player)?;
                let mut touched: Vec<String> = previous.into_iter().filter(|p| *p != room).collect();
                touched.push(room);
                Ok(touched)
            }
            Command::Move { d_row, d_col } => self.in_room(player, |room| {
                room.move_cursor(player, d_row, d_col).map(|_| ())
            }),
            Command::Place(target) => {
                self.in_room(player, |room| room.place_for(player, target).map(|_| ()))
            }
            Command::Reset => self.in_room(player, |room| {
                room.reset();
                Ok(())
            }),
            Command::Ai => self.play_ai(player),
        }
    }

    fn in_room(
        &self,
        player: u32,
        f: impl FnOnce(&mut Room) -> Result<(), HostError>,
    ) -> Result<Vec<String>, HostError> {
        let mut registry = lock(&self.registry);
        let room = registry.room_of_mut(player).ok_or(HostError::NotInRoom(player))?;
        f(room)?;
        Ok(vec![room.name().to_string()])
    }

    fn play_ai(&self, player: u32) -> Result<Vec<String>, HostError> {
        let request = self.ai_snapshot(player)?;
        let color = request.board.turn();
        let pos = AIEngine::with_config(self.engine).decide(&request.board, color)?;
        debug!("AI plays {:?} at ({}, {}) in '{}'", color, pos.row, pos.col, request.room);
        self.apply_ai(player, &request, pos)
    }

    /// Copy the player's room position for an off-lock search.
    fn ai_snapshot(&self, player: u32) -> Result<AiRequest, HostError> {
        let registry = lock(&self.registry);
        let room = registry.room_of(player).ok_or(HostError::NotInRoom(player))?;
        if room.is_over() {
            return Err(HostError::GameOver);
        }
        Ok(AiRequest {
            room: room.name().to_string(),
            generation: room.generation(),
            board: room.snapshot(),
        })
    }

    /// Apply a searched move, unless the room moved on in the meantime.
    fn apply_ai(&self, player: u32, request: &AiRequest, pos: Pos) -> Result<Vec<String>, HostError> {
        let mut registry = lock(&self.registry);
        let room = registry.room_of_mut(player).ok_or(HostError::NotInRoom(player))?;
        if room.name() != request.room || room.generation() != request.generation {
            return Err(HostError::StaleMove);
        }
        room.place(pos.row as i32, pos.col as i32, request.board.turn())?;
        Ok(vec![room.name().to_string()])
    }

    /// Player ids and the encoded state of `room`, if it still exists.
    pub fn room_state(&self, room: &str) -> Option<(Vec<u32>, String)> {
        let registry = lock(&self.registry);
        let room = registry.room(room)?;
        let members = room.players().iter().map(|p| p.id).collect();
        Some((members, encode_state(room)))
    }

    /// Drop a player from the registry and the client table.
    pub fn disconnect(&self, player: u32) -> Option<String> {
        lock(&self.clients).remove(&player);
        lock(&self.registry).leave(player)
    }

    fn register(&self, stream: &TcpStream) -> io::Result<u32> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.clients).insert(id, stream.try_clone()?);
        Ok(id)
    }

    fn send(&self, player: u32, line: &str) {
        let stream = lock(&self.clients).get(&player).and_then(|s| s.try_clone().ok());
        if let Some(mut stream) = stream {
            if let Err(e) = writeln!(stream, "{line}") {
                debug!("write to player {} failed: {}", player, e);
            }
        }
    }

    /// Send the current state of `room` to each of its members.
    pub fn broadcast(&self, room: &str) {
        let Some((members, state)) = self.room_state(room) else {
            return;
        };
        for id in members {
            self.send(id, &state);
        }
    }
}

fn handle_client(host: Arc<Host>, id: u32, stream: TcpStream) {
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                debug!("read from player {} failed: {}", id, e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>().and_then(|cmd| host.execute(id, cmd)) {
            Ok(rooms) => {
                for room in rooms {
                    host.broadcast(&room);
                }
            }
            Err(err) => {
                warn!("player {} command rejected: {}", id, err);
                host.send(id, &encode_error(&err));
            }
        }
    }

    if let Some(room) = host.disconnect(id) {
        host.broadcast(&room);
    }
    info!("player {} disconnected", id);
}

/// Accept clients forever, one thread each.
pub fn serve(listener: TcpListener, host: Arc<Host>) -> io::Result<()> {
    info!("listening on {}", listener.local_addr()?);
    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                warn!("accept failed: {}", e);
                continue;
            }
        };
        let id = match host.register(&stream) {
            Ok(id) => id,
            Err(e) => {
                warn!("could not register client: {}", e);
                continue;
            }
        };
        info!("player {} connected from {:?}", id, stream.peer_addr().ok());

        let host = Arc::clone(&host);
        thread::spawn(move || handle_client(host, id, stream));
    }
    Ok(())
}
