//! Draft slice evaluation.
//!
//! Classification, route evaluation, center-access analysis and scoring,
//! slice aggregation, and batch ranking. Every function here is a pure
//! computation over a caller-supplied tile catalog.

pub mod classify;
pub mod mecatol;
pub mod rank;
pub mod route;
pub mod slice;

pub use classify::{classify, TileClass, SUPERNOVA_ANOMALIES};
pub use mecatol::{
    analyze_mecatol_path, mecatol_path_score, BestPath, MecatolPathAnalysis, RouteSet,
};
pub use rank::{rank_slices, DraftAnalysis, IndexedAnalysis, RankEntry};
pub use route::{evaluate_route, PathStep, RouteAnalysis, RouteStatus};
pub use slice::{analyze_slice, LegendaryPlanet, PlanetSummary, SliceAnalysis};
