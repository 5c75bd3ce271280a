//! Random tile-pool suggestion for game setup.
//!
//! Draws a blue/red tile selection for a player count from the draftable
//! portion of the catalog. Balanced maps should come from a proper slice
//! draft; this is the quick-start path.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::galaxy::catalog::TileCatalog;
use crate::galaxy::tile::TileType;

/// Blue/red tile quotas per player count.
const TILE_NEEDS: [(u8, usize, usize); 6] = [
    (3, 15, 3),
    (4, 16, 4),
    (5, 18, 4),
    (6, 18, 6),
    (7, 21, 6),
    (8, 24, 6),
];

/// Errors raised while building a map suggestion.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("player count {0} is out of range (3-8)")]
    UnsupportedPlayerCount(u8),

    #[error("no draftable system tiles in the catalog")]
    NoDraftableTiles,
}

/// A blue tile offered in the suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueTile {
    pub tile_id: String,
    pub planets: Vec<String>,
}

/// A red tile offered in the suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedTile {
    pub tile_id: String,
    pub anomaly: Option<String>,
    pub wormhole: Option<String>,
}

/// A random tile selection for a player count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSuggestion {
    pub player_count: u8,
    pub blue_tiles: Vec<BlueTile>,
    pub red_tiles: Vec<RedTile>,
}

/// Draws a random blue/red tile selection for the given player count.
///
/// Non-draftable tiles never enter the pools. Green and hyperlane tiles
/// are not part of the random draw.
pub fn suggest_map(
    catalog: &TileCatalog,
    player_count: u8,
    rng: &mut impl Rng,
) -> Result<MapSuggestion, SetupError> {
    let (_, blue_needed, red_needed) = *TILE_NEEDS
        .iter()
        .find(|(count, _, _)| *count == player_count)
        .ok_or(SetupError::UnsupportedPlayerCount(player_count))?;

    let mut blue_tiles = Vec::new();
    let mut red_tiles = Vec::new();
    for (id, tile) in catalog.iter() {
        if tile.non_draftable {
            continue;
        }
        match tile.tile_type {
            TileType::Blue => blue_tiles.push(BlueTile {
                tile_id: id.to_string(),
                planets: tile.planets.iter().map(|p| p.name.clone()).collect(),
            }),
            TileType::Red => red_tiles.push(RedTile {
                tile_id: id.to_string(),
                anomaly: tile.anomaly.clone(),
                wormhole: tile.wormhole.clone(),
            }),
            TileType::Green | TileType::Hyperlane => {}
        }
    }

    if blue_tiles.is_empty() && red_tiles.is_empty() {
        return Err(SetupError::NoDraftableTiles);
    }

    // Catalog iteration order is unspecified; sort first so a seeded RNG
    // produces a reproducible draw.
    blue_tiles.sort_by(|a, b| a.tile_id.cmp(&b.tile_id));
    red_tiles.sort_by(|a, b| a.tile_id.cmp(&b.tile_id));
    blue_tiles.shuffle(rng);
    red_tiles.shuffle(rng);
    blue_tiles.truncate(blue_needed);
    red_tiles.truncate(red_needed);

    Ok(MapSuggestion {
        player_count,
        blue_tiles,
        red_tiles,
    })
}
