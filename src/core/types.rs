//! Core type definitions used throughout the codebase

use std::fmt;

/// Hit points for the player and monsters. Signed: health may dip below zero
/// for the turn on which defeat is detected.
pub type Health = i32;

/// Gold pieces
pub type Gold = u32;

/// Which equipment slot a loot item belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Armor,
    Weapon,
}

impl ItemKind {
    /// Parse the `type` field of a world file item, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "armor" | "armour" => Some(Self::Armor),
            "weapon" => Some(Self::Weapon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Weapon => "weapon",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name comparison used for every in-room lookup
///
/// Ignores case, and treats any run of whitespace as a single space, the same
/// way command input is normalized.
pub fn names_match(a: &str, b: &str) -> bool {
    let mut a = a.split_whitespace();
    let mut b = b.split_whitespace();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.to_lowercase() == y.to_lowercase() => continue,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_parse_ignores_case() {
        assert_eq!(ItemKind::parse("Weapon"), Some(ItemKind::Weapon));
        assert_eq!(ItemKind::parse(" ARMOR "), Some(ItemKind::Armor));
        assert_eq!(ItemKind::parse("potion"), None);
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Old Trunk", "old trunk"));
        assert!(!names_match("Old Trunk", "trunk"));
    }

    #[test]
    fn test_names_match_collapses_whitespace() {
        assert!(names_match("Old  Trunk", "old trunk"));
        assert!(names_match(" Old\tTrunk ", "OLD TRUNK"));
        assert!(!names_match("Old Trunk", "Old Trunk Lid"));
    }
}
