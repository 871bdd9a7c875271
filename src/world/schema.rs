//! JSON schema types for world description files
//!
//! These mirror the on-disk layout one-to-one. The loader turns them into the
//! runtime model in `world::description`, which is where validation happens.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Root structure of a world file
#[derive(Debug, Clone, Deserialize)]
pub struct WorldFile {
    pub details: DetailsRecord,
    pub starting_weapon: ItemRecord,
    pub starting_armor: ItemRecord,
    /// Shared pool for chest draws
    #[serde(default)]
    pub loot: Vec<ItemRecord>,
    /// The first room listed is where the player starts
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsRecord {
    pub name: String,
    pub description: String,
    /// Accepts `"1.2"` as well as a bare `1.2` or `3`
    #[serde(deserialize_with = "string_or_number")]
    pub version: String,
}

/// A weapon or armor entry
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    /// "weapon" or "armor"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub damage: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    pub name: String,
    pub description: String,
    /// Direction -> destination room name
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    #[serde(default)]
    pub chests: Vec<ChestRecord>,
    #[serde(default)]
    pub monsters: Vec<MonsterRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChestRecord {
    pub name: String,
    #[serde(default)]
    pub opened: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonsterRecord {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    #[serde(default)]
    pub gold: u32,
}

// Version strings show up both quoted and as bare numbers in hand-written
// world files, so take either.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct VersionVisitor;

    impl<'de> Visitor<'de> for VersionVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a version string or number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(VersionVisitor)
}
