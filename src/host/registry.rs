//! Rooms keyed by name, created on first join and dropped when empty

use std::collections::HashMap;

use log::{debug, info};

use crate::error::HostError;

use super::room::{HostConfig, Player, Room};

/// Bounded set of rooms plus the room each player currently sits in
#[derive(Debug, Default)]
pub struct RoomRegistry {
    config: HostConfig,
    rooms: HashMap<String, Room>,
    membership: HashMap<u32, String>,
}

impl RoomRegistry {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            rooms: HashMap::new(),
            membership: HashMap::new(),
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Number of live rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn room_name_of(&self, player: u32) -> Option<&str> {
        self.membership.get(&player).map(String::as_str)
    }

    pub fn room_of(&self, player: u32) -> Option<&Room> {
        self.membership.get(&player).and_then(|name| self.rooms.get(name))
    }

    pub fn room_of_mut(&mut self, player: u32) -> Option<&mut Room> {
        let name = self.membership.get(&player)?;
        self.rooms.get_mut(name)
    }

    /// Put `player` into `room`, leaving any previous room first.
    ///
    /// The room is created if it does not exist yet, subject to the room limit.
    pub fn join(&mut self, room: &str, player: u32) -> Result<Player, HostError> {
        if self.room_name_of(player) == Some(room) {
            if let Some(existing) = self.rooms.get(room).and_then(|r| r.player(player)) {
                return Ok(*existing);
            }
        }
        if !self.rooms.contains_key(room) {
            // The player's current room closes on leave if they sit there alone
            let closing = self
                .room_of(player)
                .map_or(0, |current| usize::from(current.players().len() == 1));
            if self.rooms.len() - closing >= self.config.max_rooms {
                return Err(HostError::RoomLimit(self.config.max_rooms));
            }
        }
        if let Some(target) = self.rooms.get(room) {
            if target.players().len() >= self.config.max_players {
                return Err(HostError::RoomFull {
                    room: room.to_string(),
                    limit: self.config.max_players,
                });
            }
        }

        self.leave(player);
        let config = self.config;
        let target = self.rooms.entry(room.to_string()).or_insert_with(|| {
            info!("room '{}' created", room);
            Room::new(room, &config)
        });
        let seated = target.join(player)?;
        self.membership.insert(player, room.to_string());
        debug!("player {} joined '{}' as {:?}", player, room, seated.seat);
        Ok(seated)
    }

    /// Remove `player` from their room; returns the room name if they were in one.
    ///
    /// A room left without players is discarded.
    pub fn leave(&mut self, player: u32) -> Option<String> {
        let name = self.membership.remove(&player)?;
        if let Some(room) = self.rooms.get_mut(&name) {
            room.leave(player);
            if room.is_empty() {
                self.rooms.remove(&name);
                info!("room '{}' closed", name);
            }
        }
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_join_creates_room() {
        let mut registry = RoomRegistry::new(HostConfig::default());
        let seated = registry.join("alpha", 1).unwrap();
        assert_eq!(seated.seat, Some(Stone::Black));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.room_name_of(1), Some("alpha"));
        assert_eq!(registry.room_of(1).map(Room::name), Some("alpha"));
    }

    #[test]
    fn test_room_limit() {
        let config = HostConfig {
            max_rooms: 1,
            ..HostConfig::default()
        };
        let mut registry = RoomRegistry::new(config);
        registry.join("alpha", 1).unwrap();
        assert_eq!(registry.join("beta", 2), Err(HostError::RoomLimit(1)));
        // Joining an existing room is still allowed
        assert!(registry.join("alpha", 2).is_ok());
    }

    #[test]
    fn test_lone_player_can_switch_rooms_at_limit() {
        let config = HostConfig {
            max_rooms: 2,
            ..HostConfig::default()
        };
        let mut registry = RoomRegistry::new(config);
        registry.join("alpha", 1).unwrap();
        registry.join("beta", 2).unwrap();
        registry.join("beta", 3).unwrap();

        // Leaving alpha frees its slot for gamma
        assert!(registry.join("gamma", 1).is_ok());
        assert!(registry.room("alpha").is_none());
        assert_eq!(registry.len(), 2);

        // Player 3 shares beta, so beta stays open and no slot frees up
        assert_eq!(registry.join("delta", 3), Err(HostError::RoomLimit(2)));
        assert_eq!(registry.room_name_of(3), Some("beta"));
    }

    #[test]
    fn test_full_room_keeps_player_where_they_were() {
        let config = HostConfig {
            max_players: 1,
            ..HostConfig::default()
        };
        let mut registry = RoomRegistry::new(config);
        registry.join("alpha", 1).unwrap();
        registry.join("beta", 2).unwrap();
        assert!(matches!(registry.join("alpha", 2), Err(HostError::RoomFull { .. })));
        assert_eq!(registry.room_name_of(2), Some("beta"));
    }

    #[test]
    fn test_switching_rooms_drops_empty_room() {
        let mut registry = RoomRegistry::new(HostConfig::default());
        registry.join("alpha", 1).unwrap();
        registry.join("beta", 1).unwrap();
        assert!(registry.room("alpha").is_none());
        assert_eq!(registry.room_name_of(1), Some("beta"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rejoin_same_room_is_noop() {
        let mut registry = RoomRegistry::new(HostConfig::default());
        registry.join("alpha", 1).unwrap();
        registry.join("alpha", 2).unwrap();
        let again = registry.join("alpha", 1).unwrap();
        assert_eq!(again.seat, Some(Stone::Black));
        assert_eq!(registry.room("alpha").map(|r| r.players().len()), Some(2));
    }

    #[test]
    fn test_leave_last_player_closes_room() {
        let mut registry = RoomRegistry::new(HostConfig::default());
        registry.join("alpha", 1).unwrap();
        registry.join("alpha", 2).unwrap();
        assert_eq!(registry.leave(1), Some("alpha".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.leave(2), Some("alpha".to_string()));
        assert!(registry.is_empty());
        assert_eq!(registry.leave(2), None);
    }
}
