use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use super::loader::{MapSource, RoomSource, normalize_multiline_desc};
use super::model::{Exit, Room, RoomGraph, RoomName, normalize_whitespace};

/// Why a map source was rejected. Validation stops at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map is missing required key '{field}'")]
    MissingField { field: &'static str },

    #[error("room #{index} is missing required key '{field}'")]
    MissingRoomField { index: usize, field: &'static str },

    #[error("room #{index} has an empty name")]
    EmptyRoomName { index: usize },

    #[error("duplicate room name '{name}'")]
    DuplicateRoom { name: RoomName },

    #[error("room '{room}' has an empty item name")]
    EmptyItemName { room: RoomName },

    #[error("invalid exit '{direction}' -> '{destination}' in room '{room}'")]
    InvalidExit {
        room: RoomName,
        direction: String,
        destination: String,
    },

    #[error("exit '{direction}' in room '{room}' leads to unknown room '{destination}'")]
    UnknownDestination {
        room: RoomName,
        direction: String,
        destination: String,
    },

    #[error("room '{room}' has two exits labelled '{direction}'")]
    DuplicateDirection { room: RoomName, direction: String },

    #[error("ambiguous exits to '{destination}' in room '{room}'")]
    AmbiguousExit { room: RoomName, destination: RoomName },

    #[error("invalid start room '{start}'")]
    InvalidStart { start: String },
}

/// Checks a decoded map source and builds the room graph from it.
///
/// Names (rooms, exit destinations, start, items) are whitespace-normalized
/// before any comparison. The result is all-or-nothing: the first violation
/// is returned and no partial graph is produced.
pub fn validate(raw: MapSource) -> Result<RoomGraph, MapError> {
    let start_raw = raw.start.ok_or(MapError::MissingField { field: "start" })?;
    let rooms_raw = raw.rooms.ok_or(MapError::MissingField { field: "rooms" })?;

    // Pass 1: room names, so exit checks below don't depend on room order.
    let mut names: Vec<RoomName> = Vec::with_capacity(rooms_raw.len());
    let mut known: HashSet<RoomName> = HashSet::with_capacity(rooms_raw.len());

    for (index, room) in rooms_raw.iter().enumerate() {
        let raw_name = room
            .name
            .as_deref()
            .ok_or(MapError::MissingRoomField { index, field: "name" })?;
        if room.exits.is_none() {
            return Err(MapError::MissingRoomField {
                index,
                field: "exits",
            });
        }

        let name = RoomName::normalize(raw_name);
        if name.is_empty() {
            return Err(MapError::EmptyRoomName { index });
        }
        if !known.insert(name.clone()) {
            return Err(MapError::DuplicateRoom { name });
        }
        names.push(name);
    }

    // Pass 2: exits and items, against the complete name set.
    let mut rooms: HashMap<RoomName, Room> = HashMap::with_capacity(rooms_raw.len());

    for (name, room) in names.into_iter().zip(rooms_raw) {
        let built = build_room(name, room, &known)?;
        rooms.insert(built.name.clone(), built);
    }

    let start = RoomName::normalize(&start_raw);
    if !known.contains(&start) {
        return Err(MapError::InvalidStart { start: start_raw });
    }

    debug!(rooms = rooms.len(), start = %start, "map validated");
    Ok(RoomGraph::new(start, rooms))
}

fn build_room(
    name: RoomName,
    raw: RoomSource,
    known: &HashSet<RoomName>,
) -> Result<Room, MapError> {
    let mut seen_targets: HashSet<RoomName> = HashSet::new();
    let mut seen_directions: HashSet<String> = HashSet::new();
    let mut exits: Vec<Exit> = Vec::new();

    for (direction, destination) in raw.exits.unwrap_or_default() {
        if direction.trim().is_empty() || destination.trim().is_empty() {
            return Err(MapError::InvalidExit {
                room: name,
                direction,
                destination,
            });
        }

        // Players type directions through the whitespace-normalizing command parser.
        let direction = normalize_whitespace(&direction);
        if !seen_directions.insert(direction.clone()) {
            return Err(MapError::DuplicateDirection {
                room: name,
                direction,
            });
        }

        let target = RoomName::normalize(&destination);
        if !known.contains(&target) {
            return Err(MapError::UnknownDestination {
                room: name,
                direction,
                destination,
            });
        }
        if !seen_targets.insert(target.clone()) {
            return Err(MapError::AmbiguousExit {
                room: name,
                destination: target,
            });
        }

        exits.push(Exit { direction, target });
    }

    let mut items: Vec<String> = Vec::new();
    for item in raw.items {
        let item = normalize_whitespace(&item);
        if item.is_empty() {
            return Err(MapError::EmptyItemName { room: name });
        }
        items.push(item);
    }

    Ok(Room {
        name,
        desc: normalize_multiline_desc(raw.desc.as_deref().unwrap_or_default()),
        items,
        exits,
    })
}
