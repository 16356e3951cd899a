use thiserror::Error;

use crate::world::{Room, RoomGraph, RoomName};

/// How `move` treats rooms the player has already passed through.
/// Chosen once per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Exits leading back to a room on the trail are refused; an exit that
    /// loops to the current room steps back to the previous one.
    #[default]
    Backtracking,
    /// Every exit is followed. Visits are remembered only to mention them.
    FreeRoam,
}

/// A play-time command that could not be carried out. The session state is
/// left untouched; `Display` is the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("There is no exit in that direction.")]
    NoExit { direction: String },

    #[error("That direction is ambiguous here. Did you mean: {}?", .options.join(", "))]
    AmbiguousDirection { options: Vec<String> },

    #[error("You've already been there. Try another direction.")]
    AlreadyVisited { room: RoomName },

    #[error("There is nowhere to go back to.")]
    NothingToBacktrack,

    #[error("There is no {item} here.")]
    NoSuchItem { item: String },

    #[error("You don't have {item}.")]
    NotCarrying { item: String },

    #[error("There is nothing here to take.")]
    NothingToTake,

    #[error("You aren't carrying anything.")]
    EmptyHanded,
}

/// Live session state: where the player is, what they carry, and the trail
/// of rooms behind them. Owns the room graph for the whole session.
pub struct GameState {
    pub(super) graph: RoomGraph,
    pub(super) policy: NavigationPolicy,
    pub(super) current_room: RoomName,
    pub(super) inventory: Vec<String>,
    pub(super) visited: Vec<RoomName>,
}

impl GameState {
    pub fn new(graph: RoomGraph, policy: NavigationPolicy) -> Self {
        GameState {
            current_room: graph.start().clone(),
            graph,
            policy,
            inventory: Vec::new(),
            visited: Vec::new(),
        }
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn current_room_name(&self) -> &RoomName {
        &self.current_room
    }

    pub fn current_room(&self) -> &Room {
        &self.graph[&self.current_room]
    }

    /// Rooms behind the player, oldest first. Under `FreeRoam` this is the set
    /// of rooms left at least once, in first-visit order.
    pub fn visited(&self) -> &[RoomName] {
        &self.visited
    }

    pub fn list_inventory(&self) -> &[String] {
        &self.inventory
    }
}
