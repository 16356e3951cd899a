use crate::world::normalize_whitespace;

/// One parsed line of player input. Verbs are case-insensitive; arguments
/// keep their case and are whitespace-normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Go(String),
    /// A lone word that is not a verb; tried as an exit label.
    Direction(String),
    Take(String),
    TakeAll,
    Drop(String),
    DropAll,
    Inventory,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// `None` for blank input.
    pub fn parse(input: &str) -> Option<Command> {
        let input = normalize_whitespace(input);
        let (verb, rest) = match input.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (input.as_str(), ""),
        };
        if verb.is_empty() {
            return None;
        }

        let cmd = match (verb.to_lowercase().as_str(), rest) {
            ("look" | "l", "") => Command::Look,
            ("go" | "walk", dir) => Command::Go(dir.to_string()),
            ("get" | "take", "all") => Command::TakeAll,
            ("get" | "take", item) => Command::Take(item.to_string()),
            ("drop", "all") => Command::DropAll,
            ("drop", item) => Command::Drop(item.to_string()),
            ("inventory" | "inv" | "i", "") => Command::Inventory,
            ("help" | "?", "") => Command::Help,
            ("quit" | "exit", "") => Command::Quit,
            (_, "") => Command::Direction(verb.to_string()),
            _ => Command::Unknown(input.clone()),
        };
        Some(cmd)
    }
}

pub const HELP_TEXT: &[&str] = &[
    "Commands:",
    "  look (l)               describe the room again",
    "  go <direction>         take an exit; a bare direction works too",
    "  get/take <item>        pick something up (or 'take all')",
    "  drop <item>            put something down (or 'drop all')",
    "                         ('all' always means every item, even one named 'all')",
    "  inventory (inv, i)     list what you carry",
    "  help                   show this list",
    "  quit                   leave the game",
];
