mod command;
mod items;
mod movement;
mod output;
mod render;
mod state;

pub use command::{Command, HELP_TEXT};

pub use items::{handle_drop, handle_drop_all, handle_inventory, handle_take, handle_take_all};

pub use movement::{MoveKind, Moved, try_handle_movement};
pub use output::{Output, OutputBlock};
pub use render::{RoomView, render_room};
pub use state::{GameState, NavigationPolicy, Refusal};
