//! Slice aggregation: economy totals and qualitative attributes.
//!
//! Sums planet and station economy across a slice's resolvable tiles,
//! collects tech skips, wormholes, anomalies, and legendary planets,
//! and embeds the center-access analysis.

use serde::Serialize;

use crate::eval::mecatol::{analyze_mecatol_path, MecatolPathAnalysis};
use crate::galaxy::catalog::TileCatalog;
use crate::galaxy::slice::Slice;
use crate::galaxy::tile::TraitField;

/// Maps a tech specialty to its tech-tree color. Unmapped specialties
/// pass through as their own color label.
fn specialty_color(specialty: &str) -> &str {
    match specialty {
        "propulsion" => "blue",
        "warfare" => "red",
        "biotic" => "green",
        "cybernetic" => "yellow",
        other => other,
    }
}

/// A planet recorded in a slice analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetSummary {
    pub name: String,
    pub resources: u32,
    pub influence: u32,
    #[serde(rename = "trait")]
    pub traits: Option<TraitField>,
}

/// A legendary planet and its ability text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendaryPlanet {
    pub name: String,
    pub ability: String,
}

/// Aggregated economic and qualitative attributes of one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceAnalysis {
    pub tile_ids: Vec<String>,
    pub total_resources: u32,
    pub total_influence: u32,
    pub optimal_value: u32,
    pub tech_skips: Vec<String>,
    pub wormholes: Vec<String>,
    pub anomalies: Vec<String>,
    pub planets: Vec<PlanetSummary>,
    pub legendary_planets: Vec<LegendaryPlanet>,
    pub planet_count: usize,
    pub mecatol_path: MecatolPathAnalysis,
}

/// Aggregates one slice's tiles and embeds the center-access analysis.
///
/// Identifiers absent from the catalog are skipped: a slot may
/// legitimately reference a tile a partial catalog does not carry.
/// Stations fold into the economy totals but are not planets.
pub fn analyze_slice(slice: &Slice, catalog: &TileCatalog) -> SliceAnalysis {
    let mut total_resources = 0;
    let mut total_influence = 0;
    let mut tech_skips = Vec::new();
    let mut wormholes = Vec::new();
    let mut anomalies = Vec::new();
    let mut planets = Vec::new();
    let mut legendary_planets = Vec::new();

    for id in slice.tile_ids() {
        let tile = match catalog.get(id) {
            Some(t) => t,
            None => continue,
        };

        if let Some(wormhole) = tile.wormhole.as_deref() {
            if !wormhole.is_empty() {
                wormholes.push(wormhole.to_string());
            }
        }
        if let Some(anomaly) = tile.anomaly.as_deref() {
            if !anomaly.is_empty() {
                anomalies.push(anomaly.to_string());
            }
        }

        for planet in &tile.planets {
            total_resources += planet.resources;
            total_influence += planet.influence;
            planets.push(PlanetSummary {
                name: planet.name.clone(),
                resources: planet.resources,
                influence: planet.influence,
                traits: planet.traits.clone(),
            });
            for specialty in &planet.specialties {
                tech_skips.push(format!(
                    "{}: {} ({})",
                    planet.name,
                    specialty,
                    specialty_color(specialty)
                ));
            }
            if planet.legendary.is_legendary() {
                legendary_planets.push(LegendaryPlanet {
                    name: planet.name.clone(),
                    ability: planet.legendary.ability_text().to_string(),
                });
            }
        }

        for station in &tile.stations {
            total_resources += station.resources;
            total_influence += station.influence;
        }
    }

    SliceAnalysis {
        tile_ids: slice.tile_ids().to_vec(),
        optimal_value: total_resources + total_influence,
        total_resources,
        total_influence,
        planet_count: planets.len(),
        tech_skips,
        wormholes,
        anomalies,
        planets,
        legendary_planets,
        mecatol_path: analyze_mecatol_path(slice, catalog),
    }
}
