use tracing::debug;

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::engine::state::{GameState, NavigationPolicy, Refusal};
use crate::world::{Exit, Room, RoomName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Entered a room not seen before.
    Forward,
    /// Entered a room seen before (free roam only).
    Revisit,
    /// Stepped back along the trail.
    Backtrack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub direction: String,
    pub to: RoomName,
    pub kind: MoveKind,
}

impl GameState {
    /// Follows the exit labelled `direction` from the current room, under the
    /// session's navigation policy. On refusal nothing changes.
    pub fn move_to(&mut self, direction: &str) -> Result<Moved, Refusal> {
        let exit = self
            .current_room()
            .exit(direction)
            .ok_or_else(|| Refusal::NoExit {
                direction: direction.to_string(),
            })?;
        let direction = exit.direction.clone();
        let target = exit.target.clone();

        let (to, kind) = match self.policy {
            NavigationPolicy::FreeRoam => {
                let revisit = target == self.current_room || self.visited.contains(&target);
                if !self.visited.contains(&self.current_room) {
                    self.visited.push(self.current_room.clone());
                }
                let kind = if revisit {
                    MoveKind::Revisit
                } else {
                    MoveKind::Forward
                };
                (target, kind)
            }
            NavigationPolicy::Backtracking => {
                if target == self.current_room {
                    let previous = self.visited.pop().ok_or(Refusal::NothingToBacktrack)?;
                    (previous, MoveKind::Backtrack)
                } else if self.visited.contains(&target) {
                    return Err(Refusal::AlreadyVisited { room: target });
                } else {
                    self.visited.push(self.current_room.clone());
                    (target, MoveKind::Forward)
                }
            }
        };

        debug!(from = %self.current_room, to = %to, ?kind, "moved");
        self.current_room = to.clone();

        Ok(Moved {
            direction,
            to,
            kind,
        })
    }
}

/// Maps what the player typed onto an exit label of `room`: the exact label
/// if there is one, else a unique case-insensitive match.
fn match_direction<'a>(room: &'a Room, typed: &str) -> Result<&'a str, Refusal> {
    if let Some(exit) = room.exit(typed) {
        return Ok(&exit.direction);
    }

    let matches: Vec<&Exit> = room
        .exits
        .iter()
        .filter(|e| e.direction.eq_ignore_ascii_case(typed))
        .collect();

    match matches.len() {
        0 => Err(Refusal::NoExit {
            direction: typed.to_string(),
        }),
        1 => Ok(&matches[0].direction),
        _ => {
            let mut options: Vec<String> = matches.iter().map(|e| e.direction.clone()).collect();
            options.sort();
            Err(Refusal::AmbiguousDirection { options })
        }
    }
}

/// Runs a move and reports it; a successful move renders the new room.
/// Returns false when no exit matched, leaving `out` untouched.
pub fn try_handle_movement(out: &mut Output, state: &mut GameState, typed: &str) -> bool {
    let direction = match match_direction(state.current_room(), typed) {
        Ok(label) => label.to_string(),
        Err(Refusal::NoExit { .. }) => return false,
        Err(refusal) => {
            out.say(refusal.to_string());
            return true;
        }
    };

    match state.move_to(&direction) {
        Ok(moved) => {
            match moved.kind {
                MoveKind::Forward => out.say(format!("You go {}.", moved.direction)),
                MoveKind::Revisit => {
                    out.say(format!("You go {}.", moved.direction));
                    out.say("You've been here before.");
                }
                MoveKind::Backtrack => out.say("You retrace your steps."),
            }
            render_room(out, &state.look_around());
            true
        }
        Err(Refusal::NoExit { .. }) => false,
        Err(refusal) => {
            out.say(refusal.to_string());
            true
        }
    }
}
