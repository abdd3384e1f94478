//! Line-based text protocol
//!
//! Client commands, one per line:
//!
//! ```text
//! JOIN <room>
//! MOVE <dy> <dx>
//! PLACE [<row> <col>]
//! AI
//! RESET
//! ```
//!
//! After every accepted command the server broadcasts the room state to all
//! of its members:
//!
//! ```text
//! STATE PLAYERS <n> <id>:<r>:<c> ... STONES <m> <r>:<c>:<color> ... TURN <color> [WINNER <color>]
//! ```
//!
//! Rejected commands get `ERR <message>` back, sent to the requester only.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::HostError;

use super::room::Room;

/// A parsed client command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Join(String),
    Move { d_row: i32, d_col: i32 },
    /// Explicit target, or the player's cursor when `None`
    Place(Option<(i32, i32)>),
    Ai,
    Reset,
}

fn parse_int(token: &str) -> Result<i32, HostError> {
    token
        .parse()
        .map_err(|_| HostError::Parse(format!("expected a number, got '{token}'")))
}

impl FromStr for Command {
    type Err = HostError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(HostError::Parse("empty command".to_string()));
        };

        match (verb.to_ascii_uppercase().as_str(), args) {
            ("JOIN", [room]) => Ok(Command::Join((*room).to_string())),
            ("MOVE", [dy, dx]) => Ok(Command::Move {
                d_row: parse_int(dy)?,
                d_col: parse_int(dx)?,
            }),
            ("PLACE", []) => Ok(Command::Place(None)),
            ("PLACE", [row, col]) => Ok(Command::Place(Some((parse_int(row)?, parse_int(col)?)))),
            ("AI", []) => Ok(Command::Ai),
            ("RESET", []) => Ok(Command::Reset),
            ("JOIN" | "MOVE" | "PLACE" | "AI" | "RESET", _) => {
                Err(HostError::Parse(format!("wrong arguments for {verb}")))
            }
            _ => Err(HostError::Parse(format!("unknown command '{verb}'"))),
        }
    }
}

/// Render the `STATE` line for `room`, without the trailing newline.
pub fn encode_state(room: &Room) -> String {
    let mut out = String::from("STATE");

    let _ = write!(out, " PLAYERS {}", room.players().len());
    for player in room.players() {
        let _ = write!(out, " {}:{}:{}", player.id, player.cursor.row, player.cursor.col);
    }

    let _ = write!(out, " STONES {}", room.stones().len());
    for stone in room.stones() {
        let _ = write!(out, " {}:{}:{}", stone.pos.row, stone.pos.col, stone.color.code());
    }

    let _ = write!(out, " TURN {}", room.can_place().code());
    if let Some(winner) = room.winner() {
        let _ = write!(out, " WINNER {}", winner.code());
    }
    out
}

/// Render an error reply, without the trailing newline.
pub fn encode_error(err: &HostError) -> String {
    format!("ERR {err}")
}
