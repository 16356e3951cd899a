mod loader;
mod model;
mod validator;

pub use loader::{
    LoadError, MapFormat, MapSource, RoomSource, load_map_from_file, load_map_from_str,
};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Exit, Room, RoomGraph, RoomName, normalize_whitespace};
pub use validator::{MapError, validate};
