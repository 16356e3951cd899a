pub mod engine;
pub mod world;

use std::io::{self, BufRead};

use tracing::debug;

use engine::{
    Command, GameState, HELP_TEXT, NavigationPolicy, Output, handle_drop, handle_drop_all,
    handle_inventory, handle_take, handle_take_all, render_room, try_handle_movement,
};
use world::RoomGraph;

pub use world::{LoadError, MapError, MapFormat, load_map_from_file, load_map_from_str};

/// One play session: the game state plus command dispatch.
pub struct Session {
    pub state: GameState,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a JSON map string. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new(map_json: &str, free_roam: bool) -> Result<WasmGame, JsValue> {
            let graph = load_map_from_str(map_json, MapFormat::Json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let policy = if free_roam {
                NavigationPolicy::FreeRoam
            } else {
                NavigationPolicy::Backtracking
            };
            Ok(WasmGame {
                session: Session::new(graph, policy),
            })
        }

        /// Return the initial render output.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.session.initialize().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.session.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Session {
    pub fn new(graph: RoomGraph, policy: NavigationPolicy) -> Self {
        Session {
            state: GameState::new(graph, policy),
        }
    }

    /// Opening text: the start room.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_room(&mut out, &self.state.look_around());
        out
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        let mut quit = false;

        let Some(cmd) = Command::parse(input) else {
            return (out, false);
        };
        debug!(?cmd, room = %self.state.current_room_name(), "command");

        match cmd {
            Command::Look => render_room(&mut out, &self.state.look_around()),
            Command::Go(direction) => {
                if direction.is_empty() {
                    out.say("Go where?");
                } else if !try_handle_movement(&mut out, &mut self.state, &direction) {
                    out.say("There is no exit in that direction.");
                }
            }
            Command::Direction(direction) => {
                if !try_handle_movement(&mut out, &mut self.state, &direction) {
                    out.say(INVALID_COMMAND);
                }
            }
            Command::Take(item) => handle_take(&mut out, &mut self.state, &item),
            Command::TakeAll => handle_take_all(&mut out, &mut self.state),
            Command::Drop(item) => handle_drop(&mut out, &mut self.state, &item),
            Command::DropAll => handle_drop_all(&mut out, &mut self.state),
            Command::Inventory => handle_inventory(&mut out, &self.state),
            Command::Help => {
                for line in HELP_TEXT {
                    out.say(*line);
                }
            }
            Command::Quit => {
                out.say("Goodbye!");
                quit = true;
            }
            Command::Unknown(_) => out.say(INVALID_COMMAND),
        }

        (out, quit)
    }
}

const INVALID_COMMAND: &str = "Invalid command. Type 'help' for a list of commands.";

/// Reads one line of player input without its line ending. Bytes that are not
/// UTF-8 are replaced rather than rejected. `None` at end of input.
pub fn read_input_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(policy: NavigationPolicy) -> Session {
        let graph = load_map_from_str(
            r#"{ "start": "A", "rooms": [
                { "name": "A", "desc": "Room A.", "exits": { "north": "B" } },
                { "name": "B", "desc": "Room B.", "items": ["key"], "exits": { "south": "A" } }
            ] }"#,
            MapFormat::Json,
        )
        .unwrap();
        Session::new(graph, policy)
    }

    #[test]
    fn initialize_renders_start_room() {
        let s = session(NavigationPolicy::Backtracking);
        assert_eq!(
            s.initialize().lines(),
            vec!["A", "Room A.", "Exits: north"]
        );
    }

    #[test]
    fn blank_input_does_nothing() {
        let mut s = session(NavigationPolicy::Backtracking);
        let (out, quit) = s.step("   ");
        assert!(out.blocks.is_empty());
        assert!(!quit);
    }

    #[test]
    fn go_and_bare_direction_both_move() {
        let mut s = session(NavigationPolicy::FreeRoam);

        let (out, _) = s.step("go north");
        assert_eq!(out.lines()[0], "You go north.");
        assert_eq!(s.state.current_room_name(), &"B");

        let (out, _) = s.step("south");
        assert_eq!(out.lines()[0], "You go south.");
        assert_eq!(s.state.current_room_name(), &"A");
    }

    #[test]
    fn go_without_matching_exit_refuses() {
        let mut s = session(NavigationPolicy::Backtracking);

        let (out, _) = s.step("go east");
        assert_eq!(out.lines(), vec!["There is no exit in that direction."]);
        let (out, _) = s.step("go");
        assert_eq!(out.lines(), vec!["Go where?"]);
        assert_eq!(s.state.current_room_name(), &"A");
    }

    #[test]
    fn unknown_words_are_invalid_commands() {
        let mut s = session(NavigationPolicy::Backtracking);

        for input in ["dance", "sing a song", "look at me"] {
            let (out, quit) = s.step(input);
            assert_eq!(out.lines(), vec![INVALID_COMMAND]);
            assert!(!quit);
        }
        assert_eq!(s.state.current_room_name(), &"A");
    }

    #[test]
    fn help_and_quit() {
        let mut s = session(NavigationPolicy::Backtracking);

        let (out, quit) = s.step("help");
        assert_eq!(out.lines().len(), HELP_TEXT.len());
        assert!(!quit);

        let (out, quit) = s.step("QUIT");
        assert_eq!(out.lines(), vec!["Goodbye!"]);
        assert!(quit);
    }

    #[test]
    fn undecodable_input_is_just_an_invalid_command() {
        let mut s = session(NavigationPolicy::Backtracking);
        let mut input = &b"look\r\n\xff\xfe\nquit"[..];

        assert_eq!(read_input_line(&mut input).unwrap().as_deref(), Some("look"));

        let garbled = read_input_line(&mut input).unwrap().unwrap();
        let (out, quit) = s.step(&garbled);
        assert_eq!(out.lines(), vec![INVALID_COMMAND]);
        assert!(!quit);

        assert_eq!(read_input_line(&mut input).unwrap().as_deref(), Some("quit"));
        assert_eq!(read_input_line(&mut input).unwrap(), None);
    }
}
