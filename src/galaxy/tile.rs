//! System tile records and their nested planet/station data.
//!
//! Field names mirror the JSON tile catalog: camelCase keys, `trait` as
//! either a single string or a list, `legendary` as either a bare flag or
//! the legendary ability text. All records are immutable once loaded.

use serde::{Deserialize, Serialize};

/// Color classification of a system tile in the draft pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Green,
    Blue,
    Red,
    Hyperlane,
}

/// Planet trait field: catalogs store a single trait, a list of traits,
/// or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitField {
    One(String),
    Many(Vec<String>),
}

/// Legendary marker: a bare flag, or a string carrying the ability text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Legendary {
    Flag(bool),
    Ability(String),
}

impl Default for Legendary {
    fn default() -> Self {
        Legendary::Flag(false)
    }
}

impl Legendary {
    /// Returns true if the planet is legendary at all.
    pub fn is_legendary(&self) -> bool {
        match self {
            Legendary::Flag(flag) => *flag,
            Legendary::Ability(_) => true,
        }
    }

    /// Returns the ability text, or the literal `"yes"` when the catalog
    /// only carries a bare flag.
    pub fn ability_text(&self) -> &str {
        match self {
            Legendary::Flag(_) => "yes",
            Legendary::Ability(text) => text,
        }
    }
}

/// A planet printed on a system tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub resources: u32,
    pub influence: u32,
    #[serde(rename = "trait", default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<TraitField>,
    #[serde(default)]
    pub legendary: Legendary,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// A deep-space station attached to a tile. Stations contribute to a
/// slice's economy but are not planets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub resources: u32,
    pub influence: u32,
}

/// One galaxy map tile, addressed externally by its stable tile number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemTile {
    #[serde(rename = "type")]
    pub tile_type: TileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,
    #[serde(default)]
    pub wormhole: Option<String>,
    #[serde(default)]
    pub anomaly: Option<String>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub non_draftable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SystemTile {
    /// Names of all planets on this tile, in printed order.
    pub fn planet_names(&self) -> Vec<&str> {
        self.planets.iter().map(|p| p.name.as_str()).collect()
    }
}
