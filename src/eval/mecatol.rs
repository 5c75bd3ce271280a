//! Center-access analysis: can this slice reach Mecatol, and how.
//!
//! Evaluates the three canonical routes through a slice toward the
//! shared map center, picks the best one, and computes a hand-tuned
//! access score. The gate slot (index 4) sits on every route, so an
//! impassable gate blocks the slice outright.

use serde::Serialize;

use crate::eval::classify::{classify, TileClass};
use crate::eval::route::{evaluate_route, hazard_description, RouteAnalysis, RouteStatus};
use crate::galaxy::catalog::TileCatalog;
use crate::galaxy::slice::{RouteSlot, Slice, SlotRole};
use crate::galaxy::tile::SystemTile;

/// Direct approach: center slot, then the gate.
const CENTER_ROUTE: [RouteSlot; 2] = [
    RouteSlot::Resolved(SlotRole::Center),
    RouteSlot::Resolved(SlotRole::MecatolGate),
];

/// Left approach: home-left, mecatol-left, then the gate.
const LEFT_ROUTE: [RouteSlot; 3] = [
    RouteSlot::Resolved(SlotRole::HomeLeft),
    RouteSlot::Resolved(SlotRole::MecatolLeft),
    RouteSlot::Resolved(SlotRole::MecatolGate),
];

/// Right approach: home-right, a neighbor-owned tile, then the gate.
/// The middle hop sits in the adjacent player's slice and is never
/// resolvable from this one.
const RIGHT_ROUTE: [RouteSlot; 3] = [
    RouteSlot::Resolved(SlotRole::HomeRight),
    RouteSlot::Unresolved,
    RouteSlot::Resolved(SlotRole::MecatolGate),
];

/// Best-path label reported when the gate itself cannot be crossed.
const NO_ROUTE: &str = "none through own slice";

/// Names of the three canonical routes, in candidate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteName {
    Center,
    Left,
    Right,
}

impl RouteName {
    const fn as_str(self) -> &'static str {
        match self {
            RouteName::Center => "center",
            RouteName::Left => "left",
            RouteName::Right => "right",
        }
    }
}

/// The chosen best route toward the map center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPath {
    pub route: String,
    pub steps: usize,
    pub status: RouteStatus,
    pub hazards: Vec<String>,
}

/// Per-route breakdown of the three canonical approaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSet {
    pub center: RouteAnalysis,
    pub left: RouteAnalysis,
    pub right: RouteAnalysis,
}

/// Full center-access analysis for one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MecatolPathAnalysis {
    pub mecatol_blocked: bool,
    pub mecatol_gate_tile: String,
    pub best_path: BestPath,
    pub routes: RouteSet,
    pub mecatol_path_score: i32,
    pub summary: String,
}

/// Analyzes every canonical route from the slice to the map center.
pub fn analyze_mecatol_path(slice: &Slice, catalog: &TileCatalog) -> MecatolPathAnalysis {
    let gate_id = slice.tile_id(SlotRole::MecatolGate).to_string();
    let gate_tile = catalog.get(&gate_id);
    let blocked = classify(gate_tile) == TileClass::Impassable;

    let routes = RouteSet {
        center: evaluate_route(&CENTER_ROUTE, slice, catalog),
        left: evaluate_route(&LEFT_ROUTE, slice, catalog),
        right: evaluate_route(&RIGHT_ROUTE, slice, catalog),
    };

    let best_path = if blocked {
        let hazards = gate_tile
            .and_then(|t| t.anomaly.as_deref())
            .map(|anomaly| hazard_description(anomaly, SlotRole::MecatolGate.index()))
            .into_iter()
            .collect();
        BestPath {
            route: NO_ROUTE.to_string(),
            steps: 0,
            status: RouteStatus::Blocked,
            hazards,
        }
    } else {
        select_best(&routes)
    };

    let summary = summarize(&gate_id, gate_tile, blocked, &routes);

    MecatolPathAnalysis {
        mecatol_blocked: blocked,
        mecatol_gate_tile: gate_id,
        best_path,
        routes,
        mecatol_path_score: mecatol_path_score(slice, catalog),
        summary,
    }
}

/// Picks the best candidate by status priority, then fewer steps.
/// Remaining ties keep candidate order (center, left, right).
fn select_best(routes: &RouteSet) -> BestPath {
    let candidates = [
        (RouteName::Center, &routes.center),
        (RouteName::Left, &routes.left),
        (RouteName::Right, &routes.right),
    ];

    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        let key = (candidate.1.status.priority(), candidate.1.steps);
        if key < (best.1.status.priority(), best.1.steps) {
            best = candidate;
        }
    }

    let (name, route) = best;
    BestPath {
        route: name.as_str().to_string(),
        steps: route.steps,
        status: route.status,
        hazards: route.hazards.clone(),
    }
}

/// Computes the hand-tuned center-access score over the four scored
/// slots: gate, center, home-left, and mecatol-left.
///
/// Every condition is evaluated independently and the deltas summed;
/// several can fire for the same slot. An impassable home-left tile is
/// penalized twice, once through the generic left-route term and once
/// on its own, matching the established scoring table.
pub fn mecatol_path_score(slice: &Slice, catalog: &TileCatalog) -> i32 {
    let class_at = |role: SlotRole| classify(catalog.get(slice.tile_id(role)));

    let gate = class_at(SlotRole::MecatolGate);
    let center = class_at(SlotRole::Center);
    let home_left = class_at(SlotRole::HomeLeft);
    let mecatol_left = class_at(SlotRole::MecatolLeft);

    let mut score = 0;

    match gate {
        TileClass::Impassable => score -= 100,
        TileClass::Hazard => score -= 15,
        TileClass::Clear => {}
    }

    match center {
        TileClass::Clear => score += 10,
        TileClass::Hazard => score -= 5,
        TileClass::Impassable => score -= 10,
    }

    let left_pair = [home_left, mecatol_left];
    if left_pair.iter().all(|class| *class == TileClass::Clear) {
        score += 5;
    }
    if left_pair.contains(&TileClass::Hazard) {
        score -= 3;
    }
    if left_pair.contains(&TileClass::Impassable) {
        score -= 5;
    }
    if home_left == TileClass::Impassable {
        score -= 5;
    }

    let center_path_blocked = center == TileClass::Impassable || gate == TileClass::Impassable;
    let left_path_blocked = home_left == TileClass::Impassable
        || mecatol_left == TileClass::Impassable
        || gate == TileClass::Impassable;
    if center_path_blocked && left_path_blocked {
        score -= 20;
    }

    score
}

/// Renders a tile for summary text: planet names, classification, planet
/// count, and the anomaly when present. Impassable tiles render as
/// `"<anomaly> (IMPASSABLE)"`.
fn describe_tile(id: &str, tile: Option<&SystemTile>) -> String {
    let tile = match tile {
        Some(t) => t,
        None => return format!("{} (no catalog data)", id),
    };

    let class = classify(Some(tile));
    if class == TileClass::Impassable {
        let anomaly = tile.anomaly.as_deref().unwrap_or_default();
        return format!("{} (IMPASSABLE)", anomaly.replace('-', " "));
    }

    let names = if tile.planets.is_empty() {
        "no planets".to_string()
    } else {
        tile.planet_names().join(", ")
    };
    let mut text = format!(
        "{}, {}, {} planet(s)",
        names,
        class.as_str(),
        tile.planets.len()
    );
    if let Some(anomaly) = tile.anomaly.as_deref() {
        if !anomaly.is_empty() {
            text.push_str(&format!(", {}", anomaly.replace('-', " ")));
        }
    }
    text
}

/// Builds the natural-language access summary: the center route's
/// condition, the left backup's availability, and the gate tile.
fn summarize(
    gate_id: &str,
    gate_tile: Option<&SystemTile>,
    blocked: bool,
    routes: &RouteSet,
) -> String {
    let gate_text = describe_tile(gate_id, gate_tile);
    if blocked {
        return format!(
            "Mecatol access is blocked: gate tile {} is {}.",
            gate_id, gate_text
        );
    }

    let center_part = match routes.center.status {
        RouteStatus::Clear => "Center route to Mecatol is clean".to_string(),
        RouteStatus::Hazard => format!(
            "Center route to Mecatol passes {}",
            routes.center.hazards.join(", ")
        ),
        RouteStatus::Blocked => "Center route to Mecatol is blocked".to_string(),
        RouteStatus::Unknown => "Center route to Mecatol is unresolved".to_string(),
    };

    let left_part = match routes.left.status {
        RouteStatus::Clear | RouteStatus::Hazard => "left route available as backup",
        RouteStatus::Blocked | RouteStatus::Unknown => "no backup through the left route",
    };

    format!(
        "{}; {}. Gate tile {}: {}.",
        center_part, left_part, gate_id, gate_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::tile::{Planet, TileType};

    fn empty_tile(tile_type: TileType, anomaly: Option<&str>) -> SystemTile {
        SystemTile {
            tile_type,
            faction: None,
            wormhole: None,
            anomaly: anomaly.map(String::from),
            planets: Vec::new(),
            stations: Vec::new(),
            non_draftable: false,
            source: None,
        }
    }

    fn planet_tile(names: &[&str]) -> SystemTile {
        let planets = names
            .iter()
            .map(|name| Planet {
                name: name.to_string(),
                resources: 1,
                influence: 1,
                traits: None,
                legendary: Default::default(),
                specialties: Vec::new(),
            })
            .collect();
        SystemTile {
            planets,
            ..empty_tile(TileType::Blue, None)
        }
    }

    /// Catalog where every slot of the test slice is a clear empty tile.
    fn all_clear_catalog() -> TileCatalog {
        TileCatalog::from_tiles(
            ["10", "11", "12", "13", "14"]
                .into_iter()
                .map(|id| (id.to_string(), empty_tile(TileType::Blue, None))),
        )
    }

    fn slice() -> Slice {
        Slice::from(["10", "11", "12", "13", "14"])
    }

    fn with_anomaly(catalog: &mut Vec<(String, SystemTile)>, id: &str, anomaly: &str) {
        catalog.retain(|(existing, _)| existing != id);
        catalog.push((id.to_string(), empty_tile(TileType::Red, Some(anomaly))));
    }

    fn catalog_with(anomalies: &[(&str, &str)]) -> TileCatalog {
        let mut tiles: Vec<(String, SystemTile)> = ["10", "11", "12", "13", "14"]
            .into_iter()
            .map(|id| (id.to_string(), empty_tile(TileType::Blue, None)))
            .collect();
        for (id, anomaly) in anomalies {
            with_anomaly(&mut tiles, id, anomaly);
        }
        TileCatalog::from_tiles(tiles)
    }

    // --- route selection ---

    #[test]
    fn all_clear_picks_center_route() {
        let analysis = analyze_mecatol_path(&slice(), &all_clear_catalog());
        assert!(!analysis.mecatol_blocked);
        assert_eq!(analysis.best_path.route, "center");
        assert_eq!(analysis.best_path.steps, 2);
        assert_eq!(analysis.best_path.status, RouteStatus::Clear);
        assert_eq!(analysis.mecatol_gate_tile, "14");
    }

    #[test]
    fn hazarded_center_loses_to_clear_left() {
        let catalog = catalog_with(&[("11", "nebula")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert_eq!(analysis.best_path.route, "left");
        assert_eq!(analysis.best_path.status, RouteStatus::Clear);
        assert_eq!(analysis.routes.center.status, RouteStatus::Hazard);
    }

    #[test]
    fn equal_status_breaks_tie_by_steps() {
        // Center and left both hazarded: center wins on fewer steps.
        let catalog = catalog_with(&[("11", "nebula"), ("13", "nebula")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert_eq!(analysis.routes.center.status, RouteStatus::Hazard);
        assert_eq!(analysis.routes.left.status, RouteStatus::Hazard);
        assert_eq!(analysis.best_path.route, "center");
    }

    #[test]
    fn right_route_is_always_unresolved() {
        let analysis = analyze_mecatol_path(&slice(), &all_clear_catalog());
        assert_eq!(analysis.routes.right.status, RouteStatus::Unknown);
        assert_eq!(analysis.routes.right.steps, 3);
    }

    #[test]
    fn center_and_left_blocked_falls_back_to_right() {
        let catalog = catalog_with(&[("11", "supernova"), ("13", "supernova")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert!(!analysis.mecatol_blocked, "gate itself is clear");
        assert_eq!(analysis.routes.center.status, RouteStatus::Blocked);
        assert_eq!(analysis.routes.left.status, RouteStatus::Blocked);
        assert_eq!(analysis.best_path.route, "right");
        assert_eq!(analysis.best_path.status, RouteStatus::Unknown);
    }

    // --- blocked gate ---

    #[test]
    fn impassable_gate_blocks_everything() {
        let catalog = catalog_with(&[("14", "supernova")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);

        assert!(analysis.mecatol_blocked);
        assert_eq!(analysis.best_path.route, "none through own slice");
        assert_eq!(analysis.best_path.status, RouteStatus::Blocked);
        assert_eq!(analysis.best_path.steps, 0);
        assert_eq!(
            analysis.best_path.hazards,
            vec!["supernova at index 4".to_string()]
        );

        // The gate sits on every route, so all three report blocked.
        assert_eq!(analysis.routes.center.status, RouteStatus::Blocked);
        assert_eq!(analysis.routes.left.status, RouteStatus::Blocked);
        assert_eq!(analysis.routes.right.status, RouteStatus::Blocked);
    }

    #[test]
    fn muaat_supernova_gate_also_blocks() {
        let catalog = catalog_with(&[("14", "muaat-supernova")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert!(analysis.mecatol_blocked);
        assert!(analysis.summary.contains("muaat supernova (IMPASSABLE)"));
    }

    // --- scoring ---

    #[test]
    fn all_clear_scores_fifteen() {
        assert_eq!(mecatol_path_score(&slice(), &all_clear_catalog()), 15);
    }

    #[test]
    fn missing_tiles_score_as_clear() {
        assert_eq!(mecatol_path_score(&slice(), &TileCatalog::new()), 15);
    }

    #[test]
    fn impassable_gate_scores_strongly_negative() {
        let catalog = catalog_with(&[("14", "supernova")]);
        // -100 gate, +10 clear center, +5 clear left pair, -20 both paths
        // blocked through the gate.
        assert_eq!(mecatol_path_score(&slice(), &catalog), -105);
    }

    #[test]
    fn hazarded_gate_costs_fifteen() {
        let catalog = catalog_with(&[("14", "nebula")]);
        // -15 gate, +10 center, +5 left pair.
        assert_eq!(mecatol_path_score(&slice(), &catalog), 0);
    }

    #[test]
    fn center_hazard_and_impassable_deltas() {
        let hazard = catalog_with(&[("11", "nebula")]);
        // -5 center, +5 left pair.
        assert_eq!(mecatol_path_score(&slice(), &hazard), 0);

        let blocked = catalog_with(&[("11", "supernova")]);
        // -10 center, +5 left pair; left path still open, no -20.
        assert_eq!(mecatol_path_score(&slice(), &blocked), -5);
    }

    #[test]
    fn home_left_impassable_stacks_both_penalties() {
        let catalog = catalog_with(&[("10", "supernova")]);
        // +10 center, -5 left-has-impassable, -5 extra for home-left.
        assert_eq!(mecatol_path_score(&slice(), &catalog), 0);
    }

    #[test]
    fn left_hazard_costs_three() {
        let catalog = catalog_with(&[("13", "nebula")]);
        // +10 center, -3 left-has-hazard; no +5 (pair not both clear).
        assert_eq!(mecatol_path_score(&slice(), &catalog), 7);
    }

    #[test]
    fn both_paths_blocked_without_gate() {
        let catalog = catalog_with(&[("11", "supernova"), ("10", "supernova")]);
        // -10 center impassable, -5 left-has-impassable, -5 home-left
        // extra, -20 both paths blocked.
        assert_eq!(mecatol_path_score(&slice(), &catalog), -40);
    }

    #[test]
    fn score_is_independent_of_route_selection() {
        let catalog = catalog_with(&[("11", "nebula")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert_eq!(analysis.best_path.route, "left");
        assert_eq!(analysis.mecatol_path_score, 0);
    }

    // --- summaries and descriptions ---

    #[test]
    fn clean_summary_mentions_backup_and_gate() {
        let analysis = analyze_mecatol_path(&slice(), &all_clear_catalog());
        assert!(analysis.summary.contains("Center route to Mecatol is clean"));
        assert!(analysis.summary.contains("left route available as backup"));
        assert!(analysis.summary.contains("Gate tile 14:"));
    }

    #[test]
    fn hazard_summary_lists_hazards() {
        let catalog = catalog_with(&[("11", "gravity-rift")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert!(analysis
            .summary
            .contains("passes gravity rift at index 1"));
    }

    #[test]
    fn blocked_left_summary_reports_no_backup() {
        let catalog = catalog_with(&[("13", "supernova")]);
        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert!(analysis.summary.contains("no backup through the left route"));
    }

    #[test]
    fn gate_description_includes_planets_and_count() {
        let mut tiles: Vec<(String, SystemTile)> = ["10", "11", "12", "13"]
            .into_iter()
            .map(|id| (id.to_string(), empty_tile(TileType::Blue, None)))
            .collect();
        tiles.push(("14".to_string(), planet_tile(&["Abyz", "Fria"])));
        let catalog = TileCatalog::from_tiles(tiles);

        let analysis = analyze_mecatol_path(&slice(), &catalog);
        assert!(
            analysis.summary.contains("Abyz, Fria, clear, 2 planet(s)"),
            "summary was: {}",
            analysis.summary
        );
    }

    #[test]
    fn unknown_gate_tile_still_summarizes() {
        let analysis = analyze_mecatol_path(&slice(), &TileCatalog::new());
        assert!(analysis.summary.contains("14 (no catalog data)"));
    }

    #[test]
    fn serializes_camel_case_keys() {
        let analysis = analyze_mecatol_path(&slice(), &all_clear_catalog());
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("mecatolBlocked").is_some());
        assert!(json.get("mecatolGateTile").is_some());
        assert!(json.get("bestPath").is_some());
        assert!(json.get("mecatolPathScore").is_some());
        assert_eq!(json["routes"]["center"]["status"], "clear");
    }
}

