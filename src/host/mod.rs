//! Multi-room game host
//!
//! Rooms hold seated players, cursors and the stone list; the registry owns
//! every room; the protocol turns text lines into commands and room state back
//! into text; the server ties them to TCP clients.

pub mod protocol;
pub mod registry;
pub mod room;
pub mod server;

pub use protocol::{encode_error, encode_state, Command};
pub use registry::RoomRegistry;
pub use room::{HostConfig, PlacedStone, Player, Room};
pub use server::{serve, Host};
