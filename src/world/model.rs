use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use serde::Serialize;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Canonical room key: trimmed, with every internal whitespace run collapsed to one space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomName(String);

impl RoomName {
    pub fn normalize(raw: &str) -> Self {
        RoomName(normalize_whitespace(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RoomName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoomName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Same rule as room names; also applied to item names and player-typed arguments.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[derive(Debug)]
pub struct Exit {
    pub direction: String,
    pub target: RoomName,
}

#[derive(Debug)]
pub struct Room {
    pub name: RoomName,
    pub desc: String,
    pub items: Vec<String>,
    pub exits: Vec<Exit>,
}

impl Room {
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|e| e.direction.as_str())
    }

    /// Removes the first item equal to `item`; returns whether one was removed.
    pub(crate) fn remove_item(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_item(&mut self, item: String) {
        self.items.push(item);
    }
}

/// Validated room graph. Its shape (room set and exits) is fixed once built;
/// only per-room item lists change during play, through crate-internal access.
#[derive(Debug)]
pub struct RoomGraph {
    start: RoomName,
    rooms: HashMap<RoomName, Room>,
}

impl RoomGraph {
    pub(crate) fn new(start: RoomName, rooms: HashMap<RoomName, Room>) -> Self {
        RoomGraph { start, rooms }
    }

    pub fn start(&self) -> &RoomName {
        &self.start
    }

    pub fn room(&self, name: &RoomName) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub(crate) fn room_mut(&mut self, name: &RoomName) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    pub fn contains(&self, name: &RoomName) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Rooms held by a `GameState` are always graph keys, so lookups by them index directly.
impl Index<&RoomName> for RoomGraph {
    type Output = Room;

    fn index(&self, name: &RoomName) -> &Room {
        &self.rooms[name]
    }
}
