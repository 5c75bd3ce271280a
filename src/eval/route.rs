//! Route evaluation over a slice's fixed topology.
//!
//! A route is an ordered list of slots, each either resolved to one of
//! the slice's five positions or owned by a neighboring slice and
//! therefore unresolvable here. Evaluation classifies every resolved
//! tile and derives a single status for the whole route.

use serde::{Serialize, Serializer};

use crate::eval::classify::{classify, TileClass};
use crate::galaxy::catalog::TileCatalog;
use crate::galaxy::slice::{RouteSlot, Slice};

/// Marker used in serialized paths for a slot owned by a neighboring slice.
const UNKNOWN_MARKER: &str = "unknown";

/// One entry of an evaluated route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Tile(String),
    Unknown,
}

impl Serialize for PathStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathStep::Tile(id) => serializer.serialize_str(id),
            PathStep::Unknown => serializer.serialize_str(UNKNOWN_MARKER),
        }
    }
}

/// Overall passability of an evaluated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Clear,
    Hazard,
    Unknown,
    Blocked,
}

impl RouteStatus {
    /// Comparator key for route selection: lower is better.
    pub const fn priority(self) -> u8 {
        match self {
            RouteStatus::Clear => 0,
            RouteStatus::Hazard => 1,
            RouteStatus::Unknown => 2,
            RouteStatus::Blocked => 3,
        }
    }

    /// Lowercase display form used in summaries.
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteStatus::Clear => "clear",
            RouteStatus::Hazard => "hazard",
            RouteStatus::Unknown => "unknown",
            RouteStatus::Blocked => "blocked",
        }
    }
}

/// The evaluated condition of one route toward the map center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAnalysis {
    pub path: Vec<PathStep>,
    pub steps: usize,
    pub status: RouteStatus,
    pub hazards: Vec<String>,
}

/// Renders an anomaly slot for human-readable hazard lists.
pub(crate) fn hazard_description(anomaly: &str, index: usize) -> String {
    format!("{} at index {}", anomaly.replace('-', " "), index)
}

/// Evaluates one route through the slice.
///
/// Status derivation, in priority order: any impassable slot blocks the
/// route outright; otherwise any unresolved slot leaves it unknown;
/// otherwise any hazard downgrades it; otherwise it is clear. A route of
/// N slots is N steps out: the last slot is always the gate, and its
/// step carries the traveler onto the map center.
pub fn evaluate_route(route: &[RouteSlot], slice: &Slice, catalog: &TileCatalog) -> RouteAnalysis {
    let mut path = Vec::with_capacity(route.len());
    let mut hazards = Vec::new();
    let mut saw_impassable = false;
    let mut saw_unknown = false;
    let mut saw_hazard = false;

    for slot in route {
        match slot {
            RouteSlot::Resolved(role) => {
                let id = slice.tile_id(*role);
                let tile = catalog.get(id);
                let class = classify(tile);
                if class != TileClass::Clear {
                    if class == TileClass::Impassable {
                        saw_impassable = true;
                    } else {
                        saw_hazard = true;
                    }
                    if let Some(anomaly) = tile.and_then(|t| t.anomaly.as_deref()) {
                        hazards.push(hazard_description(anomaly, role.index()));
                    }
                }
                path.push(PathStep::Tile(id.to_string()));
            }
            RouteSlot::Unresolved => {
                saw_unknown = true;
                path.push(PathStep::Unknown);
            }
        }
    }

    let status = if saw_impassable {
        RouteStatus::Blocked
    } else if saw_unknown {
        RouteStatus::Unknown
    } else if saw_hazard {
        RouteStatus::Hazard
    } else {
        RouteStatus::Clear
    };

    RouteAnalysis {
        steps: path.len(),
        path,
        status,
        hazards,
    }
}
