use crate::engine::output::Output;
use crate::engine::state::GameState;

/// Snapshot of what the player can see in the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView<'a> {
    pub name: &'a str,
    pub desc: &'a str,
    pub items: &'a [String],
    /// Direction tokens, sorted.
    pub exits: Vec<&'a str>,
}

impl GameState {
    pub fn look_around(&self) -> RoomView<'_> {
        let room = self.current_room();
        let mut exits: Vec<&str> = room.directions().collect();
        exits.sort();

        RoomView {
            name: room.name.as_str(),
            desc: &room.desc,
            items: &room.items,
            exits,
        }
    }
}

pub fn render_room(out: &mut Output, view: &RoomView<'_>) {
    out.title(view.name);
    out.say(view.desc);

    if !view.items.is_empty() {
        out.items(format!("You see: {}.", view.items.join(", ")));
    }

    if view.exits.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        out.set_exits(format!("Exits: {}", view.exits.join(", ")));
    }
}
