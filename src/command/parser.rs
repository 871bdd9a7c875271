//! Parse a line of player input into a `Command`

/// A player command, arguments already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stats,
    Look,
    /// Move through an exit
    Go(String),
    /// Open a chest by name
    Open(String),
    /// Attack a monster by name
    Fight(String),
    Help,
    Quit,
    /// Anything not recognized, normalized
    Unknown(String),
}

impl Command {
    /// Parse trimmed, lowercased input. Blank input gives `None`.
    ///
    /// Runs of whitespace collapse to one space, so `open   old trunk` and
    /// `open old trunk` name the same chest.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        if normalized.is_empty() {
            return None;
        }

        let command = if normalized == "stats" {
            Command::Stats
        } else if normalized == "look" {
            Command::Look
        } else if let Some(rest) = normalized.strip_prefix("go ") {
            // Only the first word is a direction; `go north now` goes north
            let direction = rest.split_once(' ').map_or(rest, |(first, _)| first);
            Command::Go(direction.to_string())
        } else if let Some(chest) = normalized.strip_prefix("open ") {
            Command::Open(chest.to_string())
        } else if let Some(monster) = normalized.strip_prefix("fight ") {
            Command::Fight(monster.to_string())
        } else if normalized == "help" {
            Command::Help
        } else if normalized == "quit" {
            Command::Quit
        } else {
            Command::Unknown(normalized)
        };

        Some(command)
    }
}
