use std::path::PathBuf;

use wayfarer::engine::{NavigationPolicy, Refusal};
use wayfarer::world::{RoomGraph, RoomName};
use wayfarer::{MapFormat, Session, load_map_from_file};

fn map_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("maps").join(file)
}

fn summary(graph: &RoomGraph) -> Vec<(String, Vec<String>, Vec<(String, String)>)> {
    let mut rooms: Vec<_> = graph
        .rooms()
        .map(|r| {
            let mut exits: Vec<(String, String)> = r
                .exits
                .iter()
                .map(|e| (e.direction.clone(), e.target.to_string()))
                .collect();
            exits.sort();
            (r.name.to_string(), r.items.clone(), exits)
        })
        .collect();
    rooms.sort();
    rooms
}

#[test]
fn bundled_maps_agree() {
    let json = load_map_from_file(&map_path("manor.json"), None).unwrap();
    let toml = load_map_from_file(&map_path("manor.toml"), None).unwrap();

    assert_eq!(json.len(), 5);
    assert_eq!(json.start(), toml.start());
    assert_eq!(summary(&json), summary(&toml));

    let porch = json.room(json.start()).unwrap();
    assert_eq!(
        porch.desc,
        toml.room(toml.start()).unwrap().desc,
        "descriptions normalize the same way in both encodings"
    );
}

#[test]
fn explicit_format_overrides_extension() {
    let err = load_map_from_file(&map_path("manor.json"), Some(MapFormat::Toml)).unwrap_err();
    assert!(matches!(err, wayfarer::LoadError::Toml(_)));
}

#[test]
fn manor_tour_with_backtracking() {
    let graph = load_map_from_file(&map_path("manor.json"), None).unwrap();
    let mut session = Session::new(graph, NavigationPolicy::Backtracking);
    let state = &mut session.state;

    state.move_to("in").unwrap();
    state.move_to("east").unwrap();
    state.move_to("down").unwrap();
    assert_eq!(state.current_room_name(), &"Cellar");
    assert_eq!(
        state.move_to("up"),
        Err(Refusal::AlreadyVisited {
            room: RoomName::normalize("Library")
        })
    );

    state.take_item("wine bottle").unwrap();
    state.move_to("back").unwrap();
    state.move_to("back").unwrap();
    assert_eq!(state.current_room_name(), &"Entrance Hall");

    state.move_to("west").unwrap();
    state.take_item("brass key").unwrap();
    assert_eq!(state.list_inventory(), ["wine bottle", "brass key"]);
    assert_eq!(state.current_room().items, ["knife"]);
}
