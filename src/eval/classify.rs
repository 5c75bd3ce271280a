//! Tile hazard classification.
//!
//! The single hazard taxonomy shared by route evaluation, tile
//! descriptions, and the path scorer. Classification policy must not
//! drift between call sites.

use crate::galaxy::tile::SystemTile;

/// Anomaly identifiers that make a tile impossible to move through.
pub const SUPERNOVA_ANOMALIES: [&str; 2] = ["supernova", "muaat-supernova"];

/// Passability classification of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    Clear,
    Hazard,
    Impassable,
}

impl TileClass {
    /// Lowercase display form used in tile descriptions.
    pub const fn as_str(self) -> &'static str {
        match self {
            TileClass::Clear => "clear",
            TileClass::Hazard => "hazard",
            TileClass::Impassable => "impassable",
        }
    }
}

/// Classifies a tile by its anomaly field.
///
/// A missing tile or a tile with no anomaly is clear. The two supernova
/// variants are impassable; every other anomaly endangers passage
/// without forbidding it.
pub fn classify(tile: Option<&SystemTile>) -> TileClass {
    let anomaly = match tile.and_then(|t| t.anomaly.as_deref()) {
        Some(a) if !a.is_empty() => a,
        _ => return TileClass::Clear,
    };
    if SUPERNOVA_ANOMALIES.contains(&anomaly) {
        TileClass::Impassable
    } else {
        TileClass::Hazard
    }
}
