use tracing::debug;

use crate::engine::output::Output;
use crate::engine::state::{GameState, Refusal};
use crate::world::normalize_whitespace;

impl GameState {
    /// Moves one `item` (exact match after whitespace normalization) from the
    /// current room to the end of the inventory.
    pub fn take_item(&mut self, item: &str) -> Result<String, Refusal> {
        let item = normalize_whitespace(item);
        let removed = match self.graph.room_mut(&self.current_room) {
            Some(room) => room.remove_item(&item),
            None => false,
        };
        if !removed {
            return Err(Refusal::NoSuchItem { item });
        }

        debug!(item = %item, room = %self.current_room, "item taken");
        self.inventory.push(item.clone());
        Ok(item)
    }

    /// Moves one `item` from the inventory to the end of the current room's item list.
    pub fn drop_item(&mut self, item: &str) -> Result<String, Refusal> {
        let item = normalize_whitespace(item);
        let idx = self
            .inventory
            .iter()
            .position(|i| *i == item)
            .ok_or_else(|| Refusal::NotCarrying { item: item.clone() })?;

        let Some(room) = self.graph.room_mut(&self.current_room) else {
            return Err(Refusal::NotCarrying { item });
        };
        let item = self.inventory.remove(idx);
        room.push_item(item.clone());

        debug!(item = %item, room = %self.current_room, "item dropped");
        Ok(item)
    }

    /// Takes every item in the room, in display order.
    pub fn take_all(&mut self) -> Result<Vec<String>, Refusal> {
        let taken: Vec<String> = match self.graph.room_mut(&self.current_room) {
            Some(room) => room.items.drain(..).collect(),
            None => Vec::new(),
        };
        if taken.is_empty() {
            return Err(Refusal::NothingToTake);
        }

        self.inventory.extend(taken.iter().cloned());
        Ok(taken)
    }

    /// Drops everything carried, in inventory order.
    pub fn drop_all(&mut self) -> Result<Vec<String>, Refusal> {
        if self.inventory.is_empty() {
            return Err(Refusal::EmptyHanded);
        }
        let Some(room) = self.graph.room_mut(&self.current_room) else {
            return Err(Refusal::EmptyHanded);
        };

        let dropped: Vec<String> = self.inventory.drain(..).collect();
        room.items.extend(dropped.iter().cloned());
        Ok(dropped)
    }
}

pub fn handle_inventory(out: &mut Output, state: &GameState) {
    let carried = state.list_inventory();

    if carried.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    out.say("You are carrying:");
    for item in carried {
        out.say(format!("  {}", item));
    }
}

pub fn handle_take(out: &mut Output, state: &mut GameState, target: &str) {
    if target.trim().is_empty() {
        out.say("Take what?");
        return;
    }

    match state.take_item(target) {
        Ok(item) => out.say(format!("You take the {}.", item)),
        Err(refusal) => out.say(refusal.to_string()),
    }
}

pub fn handle_take_all(out: &mut Output, state: &mut GameState) {
    match state.take_all() {
        Ok(items) => {
            for item in items {
                out.say(format!("You take the {}.", item));
            }
        }
        Err(refusal) => out.say(refusal.to_string()),
    }
}

pub fn handle_drop(out: &mut Output, state: &mut GameState, target: &str) {
    if target.trim().is_empty() {
        out.say("Drop what?");
        return;
    }

    match state.drop_item(target) {
        Ok(item) => out.say(format!("You drop the {}.", item)),
        Err(refusal) => out.say(refusal.to_string()),
    }
}

pub fn handle_drop_all(out: &mut Output, state: &mut GameState) {
    match state.drop_all() {
        Ok(items) => {
            for item in items {
                out.say(format!("You drop the {}.", item));
            }
        }
        Err(refusal) => out.say(refusal.to_string()),
    }
}
