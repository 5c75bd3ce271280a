//! The tile catalog: a read-only, string-keyed store of system tiles.
//!
//! Loaded once from a JSON object keyed by tile number and passed
//! explicitly into every analysis call. Lookups of unknown identifiers
//! return `None`; callers treat missing tiles as clear/absent rather
//! than failing, since a partial catalog is legitimate during drafting.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::galaxy::tile::SystemTile;

/// Errors that can occur while loading a tile catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String-keyed store of system tiles.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    tiles: HashMap<String, SystemTile>,
}

impl TileCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        TileCatalog {
            tiles: HashMap::new(),
        }
    }

    /// Builds a catalog from pre-constructed tiles.
    pub fn from_tiles(tiles: impl IntoIterator<Item = (String, SystemTile)>) -> Self {
        TileCatalog {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Parses a catalog from a JSON object keyed by tile number.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let tiles: HashMap<String, SystemTile> = serde_json::from_str(json)?;
        Ok(TileCatalog { tiles })
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Looks up a tile by its identifier.
    pub fn get(&self, id: &str) -> Option<&SystemTile> {
        self.tiles.get(id)
    }

    /// Returns the number of tiles in the catalog.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if the catalog holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates over all tiles in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SystemTile)> {
        self.tiles.iter().map(|(id, tile)| (id.as_str(), tile))
    }
}
